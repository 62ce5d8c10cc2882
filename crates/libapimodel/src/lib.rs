pub use libapimodel_core::*;
