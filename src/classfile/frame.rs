//! StackMapTable frames as defined in JVMS 4.7.4
//!
//! The accessor generators only ever reconverge with an empty operand stack
//! and unchanged locals, so the `same_frame` encodings are all that is
//! needed here.

/// A stack map frame at a control-flow merge point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackMapFrame {
    Same { offset_delta: u16 },
    SameExtended { offset_delta: u16 },
}

impl StackMapFrame {
    /// Encode a same-frame with the given delta, picking the compact tag
    /// when it fits.
    pub fn same(offset_delta: u16) -> Self {
        if offset_delta <= 63 {
            StackMapFrame::Same { offset_delta }
        } else {
            StackMapFrame::SameExtended { offset_delta }
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        match self {
            StackMapFrame::Same { offset_delta } => {
                debug_assert!(*offset_delta <= 63);
                bytes.push(*offset_delta as u8);
            }
            StackMapFrame::SameExtended { offset_delta } => {
                bytes.push(251); // same_frame_extended
                bytes.extend_from_slice(&offset_delta.to_be_bytes());
            }
        }
        bytes
    }
}

/// The `StackMapTable` attribute body for one method.
#[derive(Debug, Clone, Default)]
pub struct StackMapTable {
    pub frames: Vec<StackMapFrame>,
}

impl StackMapTable {
    /// Build a table of same-frames from raw bytecode offsets, applying the
    /// JVMS delta encoding: the first delta is the offset itself, each
    /// subsequent delta is the distance to the previous frame minus one.
    pub fn from_offsets(offsets: &[u16]) -> Self {
        let mut frames = Vec::with_capacity(offsets.len());
        let mut prev: Option<u16> = None;
        for &offset in offsets {
            let delta = match prev {
                None => offset,
                Some(p) => offset - p - 1,
            };
            frames.push(StackMapFrame::same(delta));
            prev = Some(offset);
        }
        Self { frames }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&(self.frames.len() as u16).to_be_bytes());
        for frame in &self.frames {
            bytes.extend_from_slice(&frame.to_bytes());
        }
        bytes
    }
}
