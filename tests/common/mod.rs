// Shared sample generators for the integration tests.

/// `len` bytes drawn from a 16-letter alphabet: compresses to roughly half.
pub fn low_entropy_text(len: usize, seed: u32) -> Vec<u8> {
    const ALPHABET: &[u8; 16] = b"etaoinshrdlucmfw";
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            ALPHABET[(state >> 28) as usize]
        })
        .collect()
}

/// `len` bytes with no exploitable structure.
pub fn noise(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        })
        .collect()
}

/// Repetitive prose.
pub fn prose(len: usize) -> Vec<u8> {
    b"It was the best of times, it was the worst of times. "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}
