//! Lane-width selection and keystream XOR
//!
//! The keystream combiner can XOR in 1-byte steps or in 16, 32 or 64-byte lanes.
//! Every lane path is portable safe code: a 16-byte lane is one `u128` XOR, a
//! 32-byte lane two and a 64-byte lane four, unrolled per step. There is no
//! AVX2 or AVX-512 specific code; whether the wider lanes end up in 256 or
//! 512-bit registers is left to the compiler and the enabled target features.
//! The width is a throughput choice only: every width produces the same bytes
//! for the same input.

use byteorder::{ByteOrder, NativeEndian};

/// XOR lane width used by the keystream combiner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum XorWidth {
    /// One byte at a time
    Scalar,
    /// One `u128` per step (SSE2 / NEON class hardware)
    Lanes16,
    /// Two `u128` per step, selected on AVX2 class hardware
    Lanes32,
    /// Four `u128` per step, selected on AVX-512 class hardware
    Lanes64,
}

impl XorWidth {
    /// Every supported width, narrowest first
    pub const ALL: [XorWidth; 4] = [
        XorWidth::Scalar,
        XorWidth::Lanes16,
        XorWidth::Lanes32,
        XorWidth::Lanes64,
    ];

    /// Number of bytes combined per step
    pub const fn lane_bytes(self) -> usize {
        match self {
            XorWidth::Scalar => 1,
            XorWidth::Lanes16 => 16,
            XorWidth::Lanes32 => 32,
            XorWidth::Lanes64 => 64,
        }
    }

    /// Widest lane the running CPU has registers for
    ///
    /// The underlying CPUID query runs once per process and is cached.
    pub fn detect() -> Self {
        detect_width()
    }
}

impl Default for XorWidth {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
cpufeatures::new!(cpuid_avx512, "avx512f");
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
cpufeatures::new!(cpuid_avx2, "avx2");
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
cpufeatures::new!(cpuid_sse2, "sse2");

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn detect_width() -> XorWidth {
    if cpuid_avx512::get() {
        XorWidth::Lanes64
    } else if cpuid_avx2::get() {
        XorWidth::Lanes32
    } else if cpuid_sse2::get() {
        XorWidth::Lanes16
    } else {
        XorWidth::Scalar
    }
}

// NEON is mandatory on aarch64
#[cfg(target_arch = "aarch64")]
fn detect_width() -> XorWidth {
    XorWidth::Lanes16
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
fn detect_width() -> XorWidth {
    XorWidth::Scalar
}

/// Compute `out[i] = input[i] ^ keystream[i]` using the given lane width
///
/// Only the common prefix of the three slices is written. Bytes that do not
/// fill a whole lane are combined one at a time.
pub fn xor_into(width: XorWidth, out: &mut [u8], input: &[u8], keystream: &[u8]) {
    let len = out.len().min(input.len()).min(keystream.len());
    let (out, input, keystream) = (&mut out[..len], &input[..len], &keystream[..len]);

    let step = width.lane_bytes();
    let vector_len = match width {
        XorWidth::Scalar => 0,
        _ => len - len % step,
    };

    let (out_vec, out_rest) = out.split_at_mut(vector_len);
    let (in_vec, in_rest) = input.split_at(vector_len);
    let (ks_vec, ks_rest) = keystream.split_at(vector_len);

    match width {
        XorWidth::Scalar => {}
        XorWidth::Lanes16 => xor_lanes::<1>(out_vec, in_vec, ks_vec),
        XorWidth::Lanes32 => xor_lanes::<2>(out_vec, in_vec, ks_vec),
        XorWidth::Lanes64 => xor_lanes::<4>(out_vec, in_vec, ks_vec),
    }

    xor_scalar(out_rest, in_rest, ks_rest);
}

/// Combine whole lanes of `W` 128-bit words
#[inline(always)]
fn xor_lanes<const W: usize>(out: &mut [u8], input: &[u8], keystream: &[u8]) {
    let step = W * 16;
    for ((o, i), k) in out
        .chunks_exact_mut(step)
        .zip(input.chunks_exact(step))
        .zip(keystream.chunks_exact(step))
    {
        let mut lane = [0u128; W];
        for (w, (i, k)) in lane.iter_mut().zip(i.chunks_exact(16).zip(k.chunks_exact(16))) {
            *w = NativeEndian::read_u128(i) ^ NativeEndian::read_u128(k);
        }
        for (w, o) in lane.iter().zip(o.chunks_exact_mut(16)) {
            NativeEndian::write_u128(o, *w);
        }
    }
}

#[inline(always)]
fn xor_scalar(out: &mut [u8], input: &[u8], keystream: &[u8]) {
    for ((o, i), k) in out.iter_mut().zip(input).zip(keystream) {
        *o = i ^ k;
    }
}
