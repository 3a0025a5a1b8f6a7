use rand::rngs::OsRng;
use rand::Rng;

/// Symbols a generated code is drawn from.
pub const CODE_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random code generation for activation and document codes.
///
/// Codes act as bearer secrets, so every symbol comes from the operating
/// system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct CodeGenerator;

impl CodeGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a code of exactly `length` symbols from [`CODE_ALPHABET`].
    ///
    /// Each symbol is drawn independently and uniformly.
    pub fn generate(&self, length: usize) -> String {
        let mut rng = OsRng;

        (0..length)
            .map(|_| char::from(CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())]))
            .collect()
    }
}
