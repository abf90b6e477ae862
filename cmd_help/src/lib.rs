use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DataEnum, DeriveInput, Expr, ExprLit, Fields, Lit, Meta, Variant, parse_macro_input};

/// 收集变体上的文档注释，每行去掉`///`后紧跟的一个空格。
fn doc_of(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .map(|line| line.strip_prefix(' ').map(str::to_owned).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 匹配任意字段的变体模式。
fn wildcard_pattern(variant: &Variant) -> proc_macro2::TokenStream {
    let name = &variant.ident;
    match &variant.fields {
        Fields::Unit => quote! { #name },
        Fields::Unnamed(_) => quote! { #name(..) },
        Fields::Named(_) => quote! { #name { .. } },
    }
}

/// 为枚举生成：
///  - `help(&self) -> &'static str`：当前变体的文档；
///  - `all_help() -> &'static [(&'static str, &'static str)]`：全部`(变体名, 文档)`。
#[proc_macro_derive(CmdHelp)]
pub fn cmd_help_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        return syn::Error::new_spanned(enum_name, "CmdHelp can only be derived on enums").to_compile_error().into();
    };

    let help_arms = variants.iter().map(|v| {
        let pattern = wildcard_pattern(v);
        let doc = doc_of(&v.attrs);
        quote! { Self::#pattern => #doc, }
    });

    let all_help_entries = variants.iter().map(|v| {
        let name = v.ident.to_string();
        let doc = doc_of(&v.attrs);
        quote! { (#name, #doc) }
    });

    let expanded = quote! {
        impl #enum_name {
            #[allow(dead_code)]
            pub fn help(&self) -> &'static str {
                match self {
                    #(#help_arms)*
                }
            }

            #[allow(dead_code)]
            pub fn all_help() -> &'static [(&'static str, &'static str)] {
                &[#(#all_help_entries),*]
            }
        }
    };

    TokenStream::from(expanded)
}
