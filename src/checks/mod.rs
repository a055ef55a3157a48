// src/checks/mod.rs

pub mod irreducibility;
pub mod primitivity;

pub use irreducibility::{is_irreducible_benor, is_irreducible_berlekamp, is_irreducible_rabin};
pub use primitivity::is_primitive_definition;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::pipeline::CheckFn;
use crate::poly::GfPoly;

/// Outcome of checking one candidate polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub irreducible: bool,
    pub primitive: bool,
}

/// Irreducibility test selection for [`make_check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrreducibleMethod {
    /// Do not test; report irreducible.
    Nil,
    Berlekamp,
    Rabin,
    BenOr,
}

/// Primitivity test selection for [`make_check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveMethod {
    /// Do not test; report primitive.
    Nil,
    Definition,
}

/// Builds the combined check handed to the pipeline.
///
/// A method set to `Nil` reports `true` for its column. A reducible
/// polynomial is reported non-primitive without running the primitivity
/// test.
pub fn make_check(
    irr_method: IrreducibleMethod,
    prim_method: PrimitiveMethod,
) -> CheckFn<GfPoly, CheckResult> {
    Arc::new(move |poly, res| {
        let irreducible = match irr_method {
            IrreducibleMethod::Nil => true,
            IrreducibleMethod::Berlekamp => is_irreducible_berlekamp(poly),
            IrreducibleMethod::Rabin => is_irreducible_rabin(poly),
            IrreducibleMethod::BenOr => is_irreducible_benor(poly),
        };
        let primitive = match prim_method {
            PrimitiveMethod::Nil => true,
            PrimitiveMethod::Definition => irreducible && is_primitive_definition(poly),
        };
        *res = Some(CheckResult {
            irreducible,
            primitive,
        });
    })
}
