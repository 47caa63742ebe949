use std::fmt;

/// Chunk dispatch over the tags this reader understands. Every other
/// 4-byte tag is carried verbatim so it can be skipped (and displayed)
/// without being interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkTag {
    Fmt,
    Data,
    Other([u8; 4]),
}

impl From<[u8; 4]> for ChunkTag {
    fn from(tag: [u8; 4]) -> Self {
        match &tag {
            b"fmt " => ChunkTag::Fmt,
            b"data" => ChunkTag::Data,
            _ => ChunkTag::Other(tag),
        }
    }
}

impl ChunkTag {
    pub fn bytes(&self) -> [u8; 4] {
        match self {
            ChunkTag::Fmt => *b"fmt ",
            ChunkTag::Data => *b"data",
            ChunkTag::Other(tag) => *tag,
        }
    }
}

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.bytes();
        write!(
            f,
            "{}{}{}{}",
            tag[0] as char, tag[1] as char, tag[2] as char, tag[3] as char,
        )
    }
}
