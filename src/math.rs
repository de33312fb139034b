/// The modulus of our perfect hash.
///
/// 2 has multiplicative order 36 modulo 37, so `(1 << k) % 37` is distinct
/// for every `k` in `0..32`.  The remainders themselves are not the
/// exponents (`2 % 37 == 2`, but `log2(2) == 1`), so we index
/// `EXPONENTS` with them.
pub const LOG2_MAGIC: u32 = 37;

/// Exponent for each residue `(1 << k) % LOG2_MAGIC`.  Slots that no power
/// of two hits (0, 7, 14, 19, 28) hold 0.
const EXPONENTS: [u8; LOG2_MAGIC as usize] = build_exponents();

const fn build_exponents() -> [u8; LOG2_MAGIC as usize] {
    let mut table = [0u8; LOG2_MAGIC as usize];
    let mut seen = [false; LOG2_MAGIC as usize];
    let mut k = 0;
    while k < 32 {
        let r = ((1u32 << k) % LOG2_MAGIC) as usize;
        if seen[r] {
            panic!("LOG2_MAGIC maps two powers of two to the same residue");
        }
        seen[r] = true;
        table[r] = k as u8;
        k += 1;
    }
    table
}

// Fail the build if the table doesn't invert the hash.
const _: () = {
    let mut k = 0;
    while k < 32 {
        if EXPONENTS[((1u32 << k) % LOG2_MAGIC) as usize] as u32 != k {
            panic!("EXPONENTS does not invert (1 << k) % LOG2_MAGIC");
        }
        k += 1;
    }
};

/// Reduce `bit` modulo `LOG2_MAGIC`.  Always in `0..LOG2_MAGIC`.
#[inline]
pub const fn residue(bit: u32) -> u32 {
    bit % LOG2_MAGIC
}

/// Look up the exponent whose power of two hashes to `r`.
///
/// Residues outside `0..LOG2_MAGIC` can't come out of [`residue`]; they
/// return 0.
#[inline]
pub fn exponent_of_residue(r: u32) -> usize {
    EXPONENTS.get(r as usize).copied().unwrap_or(0) as usize
}

/// Calculate the base-2 logarithm of `bit`, which must be a power of two.
///
/// This is one remainder and one bounds-checked table load, no loops.  For
/// `bit == 1 << k` the result is exactly `k`.  Any other input (including
/// 0) still returns some value in `0..LOG2_MAGIC`, but which one is
/// unspecified and callers must not rely on it.
///
/// Based on "Count the consecutive zero bits (trailing) on the right with
/// modulus division and lookup" at
/// http://graphics.stanford.edu/~seander/bithacks.html#ZerosOnRightModLookup
#[inline]
pub fn compute(bit: u32) -> usize {
    exponent_of_residue(residue(bit))
}

/// Basic power-of-2 integer math.
pub trait PowerOfTwoLog {
    fn bit_log2(self) -> usize;
}

impl PowerOfTwoLog for u32 {
    /// See [`compute`].  `self` is assumed to have exactly one bit set.
    #[inline]
    fn bit_log2(self) -> usize {
        compute(self)
    }
}
