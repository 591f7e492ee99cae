//! Closed catalog of supported functions.
//!
//! Each supported function is one [`FunctionId`] variant, so an unsupported
//! function cannot be represented. Text lookup goes through
//! [`FunctionCatalog::resolve`], which fails with
//! [`CatalogError::UnknownFunction`] rather than falling back to a default.
//!
//! ## Accepted names
//!
//! Matching ignores case, whitespace and explicit `*` signs, so
//! `"x^3 - 2x - 5"`, `"x^3 - 2*x - 5"` and `"X^3-2X-5"` are the same entry.
//! A label prefix such as `"f2(x) = "` is accepted, as is the short id
//! (`"f2"`) alone.

use crate::types::CatalogError;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// Identifier of a catalog function.
///
/// # Example
///
/// ```
/// use stepscan_core::math::catalog::FunctionId;
///
/// let id: FunctionId = "cos(x) - x".parse().unwrap();
/// assert_eq!(id, FunctionId::CosineMinusX);
/// assert_eq!(id.short_id(), "f4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FunctionId {
    /// `f(x) = x^2 - 4`
    QuadraticMinusFour,
    /// `f(x) = x^3 - 2x - 5`
    CubicMinusLinear,
    /// `f(x) = sin(x) - 0.5`
    SineMinusHalf,
    /// `f(x) = cos(x) - x`
    CosineMinusX,
    /// `f(x) = e^x - 2`
    ExpMinusTwo,
}

impl FunctionId {
    /// Every catalog entry, in catalog order.
    pub const ALL: [FunctionId; 5] = [
        FunctionId::QuadraticMinusFour,
        FunctionId::CubicMinusLinear,
        FunctionId::SineMinusHalf,
        FunctionId::CosineMinusX,
        FunctionId::ExpMinusTwo,
    ];

    /// Canonical expression text, e.g. `"x^2 - 4"`.
    pub fn expression(&self) -> &'static str {
        match self {
            FunctionId::QuadraticMinusFour => "x^2 - 4",
            FunctionId::CubicMinusLinear => "x^3 - 2x - 5",
            FunctionId::SineMinusHalf => "sin(x) - 0.5",
            FunctionId::CosineMinusX => "cos(x) - x",
            FunctionId::ExpMinusTwo => "e^x - 2",
        }
    }

    /// Short identifier, `"f1"` through `"f5"`.
    pub fn short_id(&self) -> &'static str {
        match self {
            FunctionId::QuadraticMinusFour => "f1",
            FunctionId::CubicMinusLinear => "f2",
            FunctionId::SineMinusHalf => "f3",
            FunctionId::CosineMinusX => "f4",
            FunctionId::ExpMinusTwo => "f5",
        }
    }

    /// Display label combining id and expression, e.g. `"f1(x) = x^2 - 4"`.
    pub fn label(&self) -> String {
        format!("{}(x) = {}", self.short_id(), self.expression())
    }

    /// Evaluate the function at `x`.
    ///
    /// Pure and deterministic for every variant.
    pub fn evaluate<T: Float>(&self, x: T) -> T {
        match self {
            FunctionId::QuadraticMinusFour => x * x - constant(4.0),
            FunctionId::CubicMinusLinear => x * x * x - constant::<T>(2.0) * x - constant(5.0),
            FunctionId::SineMinusHalf => x.sin() - constant(0.5),
            FunctionId::CosineMinusX => x.cos() - x,
            FunctionId::ExpMinusTwo => x.exp() - constant(2.0),
        }
    }

    /// Normalised spellings this entry answers to.
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            FunctionId::QuadraticMinusFour => &["x^2-4", "x²-4"],
            FunctionId::CubicMinusLinear => &["x^3-2x-5", "x³-2x-5"],
            FunctionId::SineMinusHalf => &["sin(x)-0.5", "sin(x)-1/2"],
            FunctionId::CosineMinusX => &["cos(x)-x"],
            FunctionId::ExpMinusTwo => &["e^x-2", "exp(x)-2"],
        }
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression())
    }
}

impl FromStr for FunctionId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalise(s);
        let expr = strip_label(&key);

        FunctionId::ALL
            .into_iter()
            .find(|id| id.short_id() == key || id.aliases().contains(&expr))
            .ok_or_else(|| CatalogError::UnknownFunction(s.to_string()))
    }
}

/// A resolved, immutable evaluator.
///
/// Thin wrapper around a [`FunctionId`] exposing evaluation as a plain
/// function so it can be handed to sampling and scanning code.
///
/// # Example
///
/// ```
/// use stepscan_core::math::catalog::FunctionCatalog;
///
/// let f = FunctionCatalog::resolve("x^2 - 4").unwrap();
/// assert_eq!(f.eval(3.0_f64), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    id: FunctionId,
}

impl Evaluator {
    /// Evaluator for a known catalog entry.
    pub fn new(id: FunctionId) -> Self {
        Self { id }
    }

    /// Evaluate at `x`.
    #[inline]
    pub fn eval<T: Float>(&self, x: T) -> T {
        self.id.evaluate(x)
    }

    /// Borrow as a closure, for APIs taking `Fn(T) -> T`.
    pub fn as_fn<T: Float>(&self) -> impl Fn(T) -> T + '_ {
        move |x| self.eval(x)
    }

    /// Catalog entry this evaluator was resolved from.
    pub fn id(&self) -> FunctionId {
        self.id
    }
}

impl From<FunctionId> for Evaluator {
    fn from(id: FunctionId) -> Self {
        Self::new(id)
    }
}

/// Name-to-evaluator lookup over the fixed function set.
pub struct FunctionCatalog;

impl FunctionCatalog {
    /// Resolve a function name to its evaluator.
    ///
    /// # Returns
    ///
    /// * `Ok(Evaluator)` - Evaluator for the matching entry
    /// * `Err(CatalogError::UnknownFunction)` - No entry matches `name`
    ///
    /// # Example
    ///
    /// ```
    /// use stepscan_core::math::catalog::FunctionCatalog;
    /// use stepscan_core::types::CatalogError;
    ///
    /// assert!(FunctionCatalog::resolve("f5(x) = e^x - 2").is_ok());
    /// assert_eq!(
    ///     FunctionCatalog::resolve("unsupported"),
    ///     Err(CatalogError::UnknownFunction("unsupported".to_string()))
    /// );
    /// ```
    pub fn resolve(name: &str) -> Result<Evaluator, CatalogError> {
        name.parse::<FunctionId>().map(Evaluator::new)
    }

    /// All catalog entries in catalog order.
    pub fn all() -> impl Iterator<Item = FunctionId> {
        FunctionId::ALL.into_iter()
    }
}

fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

fn normalise(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '*')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Drop a leading `f(x)=` or `fN(x)=` label.
fn strip_label(key: &str) -> &str {
    match key.split_once('=') {
        Some((lhs, rhs)) if is_label(lhs) => rhs,
        _ => key,
    }
}

fn is_label(lhs: &str) -> bool {
    lhs.strip_prefix('f')
        .and_then(|rest| rest.strip_suffix("(x)"))
        .is_some_and(|digits| digits.chars().all(|c| c.is_ascii_digit()))
}
