//! HTTP handlers, one module per resource.

pub mod pedido;
pub mod produto;
