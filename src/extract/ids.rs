//! Example identifier sources.
//!
//! Each code example gets a short opaque token that ties the rendered source
//! to its live preview on the same page. Tokens are five lowercase base-36
//! characters. Nothing persists them, so a collision across pages is
//! harmless; the page builder rejects collisions within one page.

use std::collections::HashSet;

use rand::Rng;

/// Length of every generated identifier.
pub const ID_LEN: usize = 5;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Supplies identifiers for code examples.
pub trait IdSource {
    /// Produce the next identifier.
    fn next_id(&mut self) -> String;

    /// Called before the first section of every page.
    fn start_page(&mut self) {}
}

/// Random identifiers, different on every run.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> String {
        let mut rng = rand::rng();
        (0..ID_LEN)
            .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
            .collect()
    }
}

/// Deterministic identifiers: a counter that restarts on every page.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = to_base36(self.next);
        self.next += 1;
        id
    }

    fn start_page(&mut self) {
        self.next = 0;
    }
}

/// How often [`PageIds`] redraws before accepting a duplicate.
const MAX_ATTEMPTS: usize = 8;

/// Wraps another source and avoids handing out the same id twice on a page.
pub struct PageIds<'a> {
    inner: &'a mut dyn IdSource,
    seen: HashSet<String>,
}

impl<'a> PageIds<'a> {
    pub fn new(inner: &'a mut dyn IdSource) -> Self {
        Self {
            inner,
            seen: HashSet::new(),
        }
    }
}

impl IdSource for PageIds<'_> {
    fn next_id(&mut self) -> String {
        let mut id = self.inner.next_id();
        let mut attempts = 1;
        while self.seen.contains(&id) && attempts < MAX_ATTEMPTS {
            id = self.inner.next_id();
            attempts += 1;
        }
        self.seen.insert(id.clone());
        id
    }

    fn start_page(&mut self) {
        self.seen.clear();
        self.inner.start_page();
    }
}

/// Render `value` as base-36, left-padded with zeros to [`ID_LEN`].
fn to_base36(mut value: u64) -> String {
    let mut digits = Vec::new();
    while value > 0 {
        // Always < 36, so the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation)]
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    while digits.len() < ID_LEN {
        digits.push(b'0');
    }
    digits.iter().rev().map(|byte| char::from(*byte)).collect()
}

/// True when `id` has the shape of a generated identifier.
#[must_use]
pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LEN && id.bytes().all(|byte| ALPHABET.contains(&byte))
}
