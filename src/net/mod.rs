pub mod messages;
pub mod opcode;
pub mod packet;
