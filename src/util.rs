/*
 * // Copyright (c) Radzivon Bartoshyk 9/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::err::try_vec;
use crate::{FftDirection, RafftError};
use num_complex::Complex;
use num_traits::{AsPrimitive, Num};

/// Computes e^(-2*pi*i*index/fft_len). The angle is formed in double
/// precision before the components are converted to the sample type.
#[inline]
pub(crate) fn compute_twiddle<T: Copy + Num + std::ops::Neg<Output = T> + 'static>(
    index: usize,
    fft_len: usize,
    direction: FftDirection,
) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    let angle = -2.0 * std::f64::consts::PI * index as f64 / fft_len as f64;
    let (v_sin, v_cos) = angle.sin_cos();

    let twiddle = Complex {
        re: v_cos.as_(),
        im: v_sin.as_(),
    };

    match direction {
        FftDirection::Forward => twiddle,
        FftDirection::Inverse => twiddle.conj(),
    }
}

/// Digit-reversal permutation over 2-bit groups.
///
/// Entry `j` is `j` with each 2-bit group moved to the mirrored group
/// position inside `width` bits. `width` is always even here; `width == 0`
/// degenerates to the identity table of one entry.
pub(crate) fn digit_reverse_indices(width: u32) -> Result<Vec<usize>, RafftError> {
    debug_assert!(width % 2 == 0, "digit reversal works on 2-bit groups");

    let len = 1usize << width;
    let mut indices = try_vec![0usize; len];

    for (j, dst) in indices.iter_mut().enumerate() {
        let mut reversed = 0usize;
        let mut shift = 0u32;
        while shift < width {
            reversed |= ((j >> shift) & 0b11) << (width - shift - 2);
            shift += 2;
        }
        *dst = reversed;
    }

    Ok(indices)
}
