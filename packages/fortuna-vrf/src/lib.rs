pub mod msg;

pub use msg::{request_randomness_msg, ConsumerExecuteMsg, RandomnessRequest, VrfExecuteMsg};
