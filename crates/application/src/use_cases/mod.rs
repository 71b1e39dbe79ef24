//! Application use cases (multi-call registrar workflows).

mod price_list;
mod register_sub_member;
mod transfer_domain;

pub use price_list::*;
pub use register_sub_member::*;
pub use transfer_domain::*;
