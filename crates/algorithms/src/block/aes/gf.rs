//! GF(2⁸) arithmetic with the AES reduction polynomial x⁸ + x⁴ + x³ + x + 1

/// Multiply by `x` (i.e. by 2) in GF(2⁸)
#[inline(always)]
pub fn xtime(a: u8) -> u8 {
    let high = a >> 7;
    (a << 1) ^ (high * 0x1B)
}

/// Full multiplication in GF(2⁸) by shift-and-add over `xtime`
///
/// Reference multiply for checking the round transforms against their matrix
/// definitions. The cipher itself never calls it: (Inv)MixColumns is written
/// with chained `xtime` doublings instead.
pub fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    while b != 0 {
        if b & 1 != 0 {
            p ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    p
}
