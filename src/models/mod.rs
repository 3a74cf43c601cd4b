pub mod factory;
pub mod gradient_descent;
pub mod linear;
pub mod regressor_trait;

pub use gradient_descent::LinearRegressionGD;
pub use linear::LinearRegression;
pub use regressor_trait::{FitState, Regressor};
