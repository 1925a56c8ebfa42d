use crate::combat::geometry::{Angle, Vec3f};
use crate::entities::entity::{EntityId, Ticks};
use crate::net::opcode::OpCodeTable;
use crate::net::packet::PacketReader;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageDirection {
    ClientToServer,
    ServerToClient,
}

#[derive(Debug, Error)]
pub enum MessageDecodeError {
    #[error("{opcode}: payload truncated")]
    Truncated { opcode: &'static str },
}

/// One framed message as delivered by the capture layer: opcode still
/// numeric, payload still opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub time: Ticks,
    pub direction: MessageDirection,
    pub opcode: u16,
    pub payload: Vec<u8>,
}

impl Message {
    pub fn opcode_name(&self, table: &OpCodeTable) -> String {
        table.name_of(self.opcode)
    }
}

/// C_PLAYER_LOCATION: the client reporting the start of a motion segment.
/// Feeds the motion state that later combat events extrapolate from.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerLocationMessage {
    pub start: Vec3f,
    pub heading: Angle,
    pub finish: Vec3f,
    pub movement_type: i32,
    pub speed: i16,
    pub client_time: i32,
}

impl PlayerLocationMessage {
    pub fn decode(payload: &[u8]) -> Result<Self, MessageDecodeError> {
        let mut reader = PacketReader::new(payload);
        Self::read(&mut reader).ok_or(MessageDecodeError::Truncated {
            opcode: "C_PLAYER_LOCATION",
        })
    }

    fn read(reader: &mut PacketReader<'_>) -> Option<Self> {
        let start = reader.read_vec3f()?;
        let heading = reader.read_angle()?;
        reader.skip(2)?;
        let finish = reader.read_vec3f()?;
        let movement_type = reader.read_i32_le()?;
        let speed = reader.read_i16_le()?;
        reader.skip(1)?;
        let client_time = reader.read_i32_le()?;
        Some(Self {
            start,
            heading,
            finish,
            movement_type,
            speed,
            client_time,
        })
    }
}

/// S_EACH_SKILL_RESULT, already decoded upstream. The wire layout shifts
/// between protocol versions, so the version-specific reader stays in the
/// decoder layer and hands this struct to the event builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillResultMessage {
    pub time: Ticks,
    pub source: EntityId,
    pub target: EntityId,
    pub amount: i32,
    pub skill_id: i32,
    pub is_critical: bool,
    pub is_hp: bool,
    pub is_heal: bool,
}
