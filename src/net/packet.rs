use crate::combat::geometry::{Angle, Vec3f};
use crate::entities::entity::EntityId;

/// Little-endian fixed-format payload reader. Short reads yield `None`; the
/// decoder decides whether that aborts the message or the whole stream.
#[derive(Debug, Clone)]
pub struct PacketReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> PacketReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let value = self.data[self.pos];
        self.pos += 1;
        Some(value)
    }

    pub fn read_u16_le(&mut self) -> Option<u16> {
        if self.remaining() < 2 {
            return None;
        }
        let lo = self.data[self.pos] as u16;
        let hi = self.data[self.pos + 1] as u16;
        self.pos += 2;
        Some(lo | (hi << 8))
    }

    pub fn read_i16_le(&mut self) -> Option<i16> {
        Some(self.read_u16_le()? as i16)
    }

    pub fn read_u32_le(&mut self) -> Option<u32> {
        if self.remaining() < 4 {
            return None;
        }
        let b0 = self.data[self.pos] as u32;
        let b1 = self.data[self.pos + 1] as u32;
        let b2 = self.data[self.pos + 2] as u32;
        let b3 = self.data[self.pos + 3] as u32;
        self.pos += 4;
        Some(b0 | (b1 << 8) | (b2 << 16) | (b3 << 24))
    }

    pub fn read_i32_le(&mut self) -> Option<i32> {
        Some(self.read_u32_le()? as i32)
    }

    pub fn read_u64_le(&mut self) -> Option<u64> {
        let low = self.read_u32_le()? as u64;
        let high = self.read_u32_le()? as u64;
        Some(low | (high << 32))
    }

    pub fn read_f32_le(&mut self) -> Option<f32> {
        Some(f32::from_bits(self.read_u32_le()?))
    }

    pub fn read_vec3f(&mut self) -> Option<Vec3f> {
        let x = self.read_f32_le()?;
        let y = self.read_f32_le()?;
        let z = self.read_f32_le()?;
        Some(Vec3f::new(x, y, z))
    }

    pub fn read_angle(&mut self) -> Option<Angle> {
        Some(Angle(self.read_i16_le()?))
    }

    pub fn read_entity_id(&mut self) -> Option<EntityId> {
        Some(EntityId(self.read_u64_le()?))
    }

    pub fn read_bytes(&mut self, len: usize) -> Option<&'a [u8]> {
        if self.remaining() < len {
            return None;
        }
        let start = self.pos;
        self.pos += len;
        Some(&self.data[start..start + len])
    }

    pub fn skip(&mut self, len: usize) -> Option<()> {
        if self.remaining() < len {
            return None;
        }
        self.pos += len;
        Some(())
    }
}

/// Mirror of the reader, mainly for building payloads in tests and tools.
#[derive(Debug, Default, Clone)]
pub struct PacketWriter {
    data: Vec<u8>,
}

impl PacketWriter {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.data.push(value);
    }

    pub fn write_u16_le(&mut self, value: u16) {
        self.data.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i16_le(&mut self, value: i16) {
        self.write_u16_le(value as u16);
    }

    pub fn write_u32_le(&mut self, value: u32) {
        self.data.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i32_le(&mut self, value: i32) {
        self.write_u32_le(value as u32);
    }

    pub fn write_u64_le(&mut self, value: u64) {
        self.data.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_f32_le(&mut self, value: f32) {
        self.write_u32_le(value.to_bits());
    }

    pub fn write_vec3f(&mut self, value: Vec3f) {
        self.write_f32_le(value.x);
        self.write_f32_le(value.y);
        self.write_f32_le(value.z);
    }

    pub fn write_angle(&mut self, value: Angle) {
        self.write_i16_le(value.0);
    }

    pub fn write_entity_id(&mut self, value: EntityId) {
        self.write_u64_le(value.0);
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
