pub mod sip;

pub use sip::{DigSipRequest, DigSipUseCase};
