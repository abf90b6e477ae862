use std::process::{ExitCode, Termination};
use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub(crate) enum ChainErr {
    #[error("[Bad Arg] Unknown config `{0}`, use `-h` to list the supported configs")]
    UnknownConfig(String),

    #[error("[Parse] Unable to parse `{value}` as an integer, error: {error}")]
    ParseIntErr { value: String, error: String },

    #[error("[Parse] Integer `{value}` is out of range")]
    IntOverflow { value: String },
}

impl Termination for ChainErr {
    fn report(self) -> ExitCode {
        crate::println_err!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl ChainErr {
    pub(crate) fn termination(self) -> ! {
        let exit_code = self.exit_code();
        self.report();
        std::process::exit(i32::from(exit_code));
    }

    fn exit_code(&self) -> u8 {
        match self {
            ChainErr::UnknownConfig(_) => 1,
            ChainErr::ParseIntErr { .. } => 2,
            ChainErr::IntOverflow { .. } => 3,
        }
    }
}
