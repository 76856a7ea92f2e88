//! Procedural macros for the puzzle-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro generating the `Solver` impl from `PartSolver<N>` impls.
///
/// Reads `#[aoc_solver(max_parts = N)]` and emits a `Solver` implementation
/// with `PARTS = N` whose `solve_part` dispatches part `1..=N` to the
/// corresponding `PartSolver<N>::solve`; any other part yields
/// `SolveError::PartNotImplemented`. The type must implement `AocParser` and
/// `PartSolver<K>` for every `K` in `1..=N`; a missing impl surfaces as a
/// compile error at the dispatch arm.
///
/// # Example
///
/// ```ignore
/// use puzzle_solver_macros::AocSolver;
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day1Solver;
///
/// // impl AocParser for Day1Solver { ... }
/// // impl PartSolver<1> for Day1Solver { ... }
/// // impl PartSolver<2> for Day1Solver { ... }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let mut max_parts: Option<u8> = None;
    if let Some(attr) = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
    {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("max_parts") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    max_parts = Some(lit_int.base10_parse()?);
                }
            }
            Ok(())
        })
        .expect("failed to parse #[aoc_solver(...)] attribute");
    }
    let max_parts =
        max_parts.expect("AocSolver derive requires #[aoc_solver(max_parts = N)] with N >= 1");
    assert!(max_parts >= 1, "max_parts must be at least 1");

    let arms = (1..=max_parts).map(|part| {
        quote! {
            #part => <Self as ::puzzle_solver::PartSolver<#part>>::solve(shared),
        }
    });

    let expanded = quote! {
        impl ::puzzle_solver::Solver for #name {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut <Self as ::puzzle_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::puzzle_solver::SolveError> {
                match part {
                    #(#arms)*
                    other => ::core::result::Result::Err(
                        ::puzzle_solver::SolveError::PartNotImplemented(other),
                    ),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro registering a solver with the plugin system.
///
/// Reads `#[aoc(year = Y, day = D, tags = [...])]` and submits a
/// `SolverPlugin` through `inventory`, so the solver is discovered by
/// `SolverRegistryBuilder::register_all_plugins`. The type must implement
/// the `Solver` trait; a missing impl is reported at compile time.
///
/// # Attributes
///
/// - `year`: required, the puzzle year (e.g. 2023)
/// - `day`: required, the day number (1-25)
/// - `tags`: optional array of string literals for registry filtering
///
/// # Example
///
/// ```ignore
/// use puzzle_solver_macros::{AocSolver, AutoRegisterSolver};
///
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2023, day = 3, tags = ["grid"])]
/// struct Day3Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .expect("AutoRegisterSolver derive requires an #[aoc(...)] attribute");

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    aoc_attr
        .parse_nested_meta(|meta| {
            if meta.path.is_ident("year") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    year = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("day") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    day = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("tags") {
                // tags = ["a", "b"]
                let _ = meta.value()?;
                let content;
                syn::bracketed!(content in meta.input);
                while !content.is_empty() {
                    let lit: Lit = content.parse()?;
                    if let Lit::Str(lit_str) = lit {
                        tags.push(lit_str.value());
                    }
                    if content.peek(syn::Token![,]) {
                        let _: syn::Token![,] = content.parse()?;
                    }
                }
            }
            Ok(())
        })
        .expect("failed to parse #[aoc(...)] attribute");

    let year = year.expect("missing required 'year' attribute");
    let day = day.expect("missing required 'day' attribute");

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(String::as_str);
        quote! { &[#(#tag_strs),*] }
    };

    let expanded = quote! {
        // Compile-time check that the type implements Solver, for a clearer
        // error than the inventory submission would produce on its own.
        const _: () = {
            trait MustImplementSolver: ::puzzle_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::puzzle_solver::inventory::submit! {
            ::puzzle_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
