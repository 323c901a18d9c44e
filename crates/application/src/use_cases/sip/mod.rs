mod dig_sip;

pub use dig_sip::{DigSipRequest, DigSipUseCase};
