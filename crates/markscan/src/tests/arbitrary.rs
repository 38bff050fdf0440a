use alloc::string::String;

use quickcheck::{Arbitrary, Gen};

/// Fragments that exercise every transition: sigils, blanks, single and
/// double newlines, multi-byte text.
const FRAGMENTS: &[&str] = &[
    "#", "##", "§", "\n", "\n\n", " ", "\t", "\r", "a", "word", "é", "日本", "# ", "\n#",
];

/// A document assembled from [`FRAGMENTS`].
#[derive(Debug, Clone)]
pub(crate) struct Doc(pub(crate) String);

impl Arbitrary for Doc {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 32;
        let mut doc = String::new();
        for _ in 0..len {
            doc.push_str(g.choose(FRAGMENTS).copied().unwrap_or_default());
        }
        Self(doc)
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        let chars: alloc::vec::Vec<char> = self.0.chars().collect();
        alloc::boxed::Box::new(
            (0..chars.len())
                .rev()
                .map(move |i| Self(chars.iter().take(i).collect())),
        )
    }
}
