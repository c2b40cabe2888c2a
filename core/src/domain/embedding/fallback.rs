/// Dimensionality of the local hashing embedding.
pub const FALLBACK_DIMENSIONS: usize = 384;

/// Rolling `hash * 31 + unit` over UTF-16 code units with 32-bit wraparound.
fn token_hash(token: &str) -> i32 {
    token.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

fn bucket(token: &str) -> usize {
    (token_hash(token).unsigned_abs() % FALLBACK_DIMENSIONS as u32) as usize
}

/// Deterministic bag-of-words embedding, L2-normalized.
///
/// Text without tokens yields the zero vector.
pub fn hash_embedding(text: &str) -> Vec<f32> {
    let mut embedding = vec![0f32; FALLBACK_DIMENSIONS];

    // Splitting on single spaces would also hash empty tokens into bucket 0,
    // giving blank text a unit vector. Runs of whitespace are skipped here.
    for token in text.to_lowercase().split_whitespace() {
        embedding[bucket(token)] += 1.0;
    }

    let norm = embedding.iter().map(|v| v * v).sum::<f32>().sqrt();
    let divisor = if norm == 0.0 { 1.0 } else { norm };

    embedding.iter().map(|v| v / divisor).collect()
}
