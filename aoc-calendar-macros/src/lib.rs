//! Procedural macros for the aoc-calendar library

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, LitInt};

/// Derive macro implementing `Solver` by dispatching to `PartSolver<N>`.
///
/// # Attributes
///
/// - `max_parts`: Required. Number of parts; `PartSolver<1>` through
///   `PartSolver<max_parts>` must be implemented.
///
/// # Example
///
/// ```ignore
/// use aoc_calendar::{AocParser, AocSolver, PartSolver};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day1;
///
/// impl AocParser for Day1 { /* ... */ }
/// impl PartSolver<1> for Day1 { /* ... */ }
/// impl PartSolver<2> for Day1 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut max_parts: Option<u8> = None;
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("aoc_solver")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("max_parts") {
                let value: LitInt = meta.value()?.parse()?;
                max_parts = Some(value.base10_parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported aoc_solver attribute, expected `max_parts`"))
            }
        })?;
    }

    let max_parts = match max_parts {
        Some(0) => {
            return Err(syn::Error::new_spanned(name, "max_parts must be at least 1"));
        }
        Some(parts) => parts,
        None => {
            return Err(syn::Error::new_spanned(
                name,
                "#[derive(AocSolver)] requires #[aoc_solver(max_parts = N)]",
            ));
        }
    };

    let arms = (1..=max_parts).map(|part| {
        quote! {
            #part => <Self as ::aoc_calendar::PartSolver<#part>>::solve(shared),
        }
    });

    Ok(quote! {
        impl #impl_generics ::aoc_calendar::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut <Self as ::aoc_calendar::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_calendar::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(
                        ::aoc_calendar::SolveError::PartNotImplemented(part),
                    ),
                }
            }
        }
    })
}

/// Derive macro that makes a solver discoverable by the solution registry.
///
/// The type is registered under the year of the nearest enclosing
/// `aoc_calendar::calendar!` module. Its day is the first number in the type
/// name (`Day07` → 7) unless `#[day_override(N)]` says otherwise.
///
/// # Requirements
///
/// The type must implement `Solver` and must not be generic. If `Solver` is
/// missing you get:
///
/// ```text
/// error[E0277]: the trait bound `YourSolver: Solver` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use aoc_calendar::{AocSolver, PuzzleSolution};
///
/// #[derive(AocSolver, PuzzleSolution)]
/// #[aoc_solver(max_parts = 2)]
/// pub struct Day07;
///
/// #[derive(AocSolver, PuzzleSolution)]
/// #[aoc_solver(max_parts = 2)]
/// #[day_override(12)]
/// pub struct ChristmasTreeFarm;
/// ```
#[proc_macro_derive(PuzzleSolution, attributes(day_override))]
pub fn derive_puzzle_solution(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_puzzle_solution(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_puzzle_solution(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(PuzzleSolution)] does not support generic types",
        ));
    }

    let mut day_override: Option<u32> = None;
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("day_override")) {
        if day_override.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate #[day_override]"));
        }
        let day: LitInt = attr.parse_args()?;
        day_override = Some(day.base10_parse()?);
    }

    let day_override = match day_override {
        Some(day) => quote! { ::core::option::Option::Some(#day) },
        None => quote! { ::core::option::Option::None },
    };

    Ok(quote! {
        // Compile-time check that the type implements Solver
        const _: () = {
            trait MustImplementSolver: ::aoc_calendar::Solver + 'static {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_calendar::inventory::submit! {
            ::aoc_calendar::SolutionPlugin {
                module_path: ::core::module_path!(),
                day_override: #day_override,
                solution_type: ::aoc_calendar::SolutionType::of::<#name>,
            }
        }
    })
}
