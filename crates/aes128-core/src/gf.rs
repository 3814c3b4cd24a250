//! Arithmetic in GF(2^8) under the AES polynomial x^8 + x^4 + x^3 + x + 1.
//!
//! Multiplication comes in two flavours that must agree bit for bit:
//! [`Bitwise`] shifts and conditionally reduces (the reference), while
//! [`LogTable`] adds discrete logarithms and looks the sum up in the antilog
//! table. Both tables are evaluated at compile time, so they are immutable and
//! safe to share between threads.

/// Low byte of the reduction polynomial `0x11b`.
pub const REDUCTION: u8 = 0x1b;

/// Generator of the multiplicative group used to build [`EXP`] and [`LOG`].
pub const GENERATOR: u8 = 0x03;

/// Order of the multiplicative group.
const ORDER: usize = 255;

/// Antilog table: `EXP[i] = GENERATOR^i`. `EXP[255]` wraps back to 1.
pub static EXP: [u8; 256] = EXP_TABLE;

/// Log table: `LOG[EXP[i]] = i`. `LOG[0]` is unused and left at 0.
pub static LOG: [u8; 256] = build_log(&EXP_TABLE);

/// Key-schedule round constants. `RCON[i] = x^(i-1)`; index 0 is unused.
pub const RCON: [u8; RCON_LEN] = build_rcon();

const RCON_LEN: usize = 11;

const EXP_TABLE: [u8; 256] = build_exp();

/// Multiplies by `x`, reducing when bit 7 overflows.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Shift-and-add multiplication.
pub const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let hi_bit_set = a & 0x80;
        a <<= 1;
        if hi_bit_set != 0 {
            a ^= REDUCTION;
        }
        b >>= 1;
        i += 1;
    }
    product
}

/// Table-driven multiplication.
#[inline]
pub fn multiply(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let sum = LOG[a as usize] as usize + LOG[b as usize] as usize;
    EXP[sum % ORDER]
}

/// Multiplicative inverse; zero maps to zero.
#[inline]
pub fn inverse(a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    EXP[(ORDER - LOG[a as usize] as usize) % ORDER]
}

/// A strategy for multiplying two field elements.
pub trait GfMultiply {
    /// Returns `a · b` in GF(2^8).
    fn mul(a: u8, b: u8) -> u8;
}

/// Reference multiplier built on [`gmul`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Bitwise;

/// Fast multiplier built on the [`LOG`]/[`EXP`] tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTable;

impl GfMultiply for Bitwise {
    #[inline]
    fn mul(a: u8, b: u8) -> u8 {
        gmul(a, b)
    }
}

impl GfMultiply for LogTable {
    #[inline]
    fn mul(a: u8, b: u8) -> u8 {
        multiply(a, b)
    }
}

const fn build_exp() -> [u8; 256] {
    let mut table = [0u8; 256];
    table[0] = 1;
    let mut i = 1;
    while i < ORDER {
        table[i] = gmul(table[i - 1], GENERATOR);
        i += 1;
    }
    table[ORDER] = 1;
    table
}

const fn build_log(exp: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < ORDER {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const fn build_rcon() -> [u8; RCON_LEN] {
    let mut table = [0u8; RCON_LEN];
    table[1] = 0x01;
    let mut i = 2;
    while i < RCON_LEN {
        table[i] = xtime(table[i - 1]);
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_multiply_agrees_with_bitwise_everywhere() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(
                    LogTable::mul(a, b),
                    Bitwise::mul(a, b),
                    "mismatch for {a:#04x} * {b:#04x}"
                );
            }
        }
    }

    #[test]
    fn fips197_worked_products() {
        // Section 4.2 of FIPS-197.
        assert_eq!(gmul(0x57, 0x83), 0xc1);
        assert_eq!(gmul(0x57, 0x13), 0xfe);
        assert_eq!(multiply(0x57, 0x83), 0xc1);
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0xae), 0x47);
    }

    #[test]
    fn exp_enumerates_every_nonzero_element_once() {
        let mut seen = [false; 256];
        for &v in EXP[..ORDER].iter() {
            assert_ne!(v, 0);
            assert!(!seen[v as usize], "{v:#04x} repeated");
            seen[v as usize] = true;
        }
        assert_eq!(EXP[ORDER], 1);
    }

    #[test]
    fn log_inverts_exp() {
        for i in 0..ORDER {
            assert_eq!(LOG[EXP[i] as usize] as usize, i);
        }
    }

    #[test]
    fn inverse_is_multiplicative_inverse() {
        assert_eq!(inverse(0), 0);
        for a in 1..=255u8 {
            assert_eq!(multiply(a, inverse(a)), 1, "bad inverse for {a:#04x}");
        }
    }

    #[test]
    fn rcon_matches_fips197() {
        assert_eq!(
            RCON,
            [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36]
        );
    }
}
