#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks,
    Tildes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static [u8] = b"```";
    pub const TILDES: &'static [u8] = b"~~~";

    pub fn sig(line: &[u8]) -> Option<FenceSig> {
        let indent = line.iter().take(3).take_while(|&&c| c == b' ').count();
        let t = &line[indent..];
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceSig::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceSig::Tildes)
        } else {
            None
        }
    }

    pub fn kind(sig: FenceSig) -> FenceKind {
        match sig {
            FenceSig::Backticks => FenceKind::Backticks,
            FenceSig::Tildes => FenceKind::Tildes,
        }
    }

    /// A closing fence is a fence of the same kind with nothing after it.
    pub fn closes(kind: FenceKind, line: &[u8]) -> bool {
        let marker = match kind {
            FenceKind::Backticks => b'`',
            FenceKind::Tildes => b'~',
        };
        let same = matches!(
            (kind, Self::sig(line)),
            (FenceKind::Backticks, Some(FenceSig::Backticks))
                | (FenceKind::Tildes, Some(FenceSig::Tildes))
        );
        same && line.iter().all(|&c| c == marker || c == b' ')
    }

    /// The language named after an opening fence, or `""`.
    pub fn info(line: &[u8]) -> &[u8] {
        let rest = line
            .iter()
            .position(|&c| c != b' ' && c != b'`' && c != b'~')
            .map_or(&[][..], |p| &line[p..]);
        let end = rest
            .iter()
            .position(|c| c.is_ascii_whitespace() || *c == b'{' || *c == b'`')
            .unwrap_or(rest.len());
        &rest[..end]
    }
}
