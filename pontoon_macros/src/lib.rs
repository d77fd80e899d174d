use proc_macro::TokenStream;
use quote::ToTokens;
use syn;

/// This macro is added before a method of the `Round` struct in the impl
/// block. Use this macro to first check if the current round phase is
/// exactly the phase in the attribute.
///
/// For example, `#[allowed_phase(Betting)]` will make a method first check
/// if the current phase is `Betting`. If not, the method returns a
/// `GameError::WrongPhase` describing the mismatch.
#[proc_macro_attribute]
pub fn allowed_phase(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut ast: syn::ImplItemFn = syn::parse(item).unwrap();
    let phase = attr.to_string();
    let function_name = ast.sig.ident.to_string();
    let code = format!(
        r#"
    if self.current_phase != RoundPhase::{} {{
        return Err(GameError::WrongPhase {{
            operation: "{}",
            required: RoundPhase::{},
            current: self.current_phase,
        }});
    }}
"#,
        phase, function_name, phase
    );
    let early_return: TokenStream = code.parse().unwrap();
    let early_return: syn::Stmt = syn::parse(early_return).unwrap();
    ast.block.stmts.insert(0, early_return);
    ast.into_token_stream().into()
}
