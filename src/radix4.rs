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
use crate::butterflies::{rotate_90, single_radix2, single_radix4};
use crate::err::try_vec;
use crate::util::{compute_twiddle, digit_reverse_indices};
use crate::{FftDirection, FftSample, RafftError};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Base-case strategy, fixed at construction by the parity of log2(len).
/// `Passthrough` covers the 1-point sub-engine the real-input path needs
/// for length-2 transforms; the public constructor never produces it.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub(crate) enum BaseCase {
    Passthrough,
    Radix2,
    Radix4,
}

/// Decimation-in-time butterfly network for power-of-two lengths.
///
/// The network seeds its output from digit-reversed input positions with a
/// direct radix-2 or radix-4 combine, then runs radix-4 passes over
/// quadrupling block lengths. It is out-of-place and keeps no per-call
/// state, so one instance serves any number of concurrent callers.
pub(crate) struct Radix4<T> {
    twiddles: Vec<Complex<T>>,
    bit_rev: Vec<usize>,
    base: BaseCase,
    execution_length: usize,
}

impl<T: FftSample> Radix4<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(size: usize) -> Result<Radix4<T>, RafftError> {
        debug_assert!(
            size.is_power_of_two(),
            "engine length must be a power of two"
        );

        let exponent = size.trailing_zeros();
        let (base, base_exponent) = match exponent {
            0 => (BaseCase::Passthrough, 0),
            e if e % 2 == 1 => (BaseCase::Radix2, 1),
            _ => (BaseCase::Radix4, 2),
        };

        // One full-circle table shared by every stage; stage k-indices step
        // by an integer stride so no entry is ever recomputed.
        let mut twiddles = try_vec![Complex::<T>::default(); size];
        for (k, dst) in twiddles.iter_mut().enumerate() {
            *dst = compute_twiddle(k, size, FftDirection::Forward);
        }

        let bit_rev = digit_reverse_indices(exponent - base_exponent)?;

        Ok(Radix4 {
            twiddles,
            bit_rev,
            base,
            execution_length: size,
        })
    }

    #[inline]
    pub(crate) fn length(&self) -> usize {
        self.execution_length
    }

    #[inline]
    fn twiddle(&self, k: usize, direction: FftDirection) -> Complex<T> {
        let w = unsafe { *self.twiddles.get_unchecked(k) };
        match direction {
            FftDirection::Forward => w,
            FftDirection::Inverse => w.conj(),
        }
    }

    pub(crate) fn execute(
        &self,
        dst: &mut [Complex<T>],
        src: &[Complex<T>],
        direction: FftDirection,
    ) -> Result<(), RafftError> {
        if src.len() != self.execution_length {
            return Err(RafftError::InvalidLength(self.execution_length, src.len()));
        }
        if dst.len() != self.execution_length {
            return Err(RafftError::InvalidLength(self.execution_length, dst.len()));
        }

        let n = self.execution_length;
        let stride = self.bit_rev.len();

        match self.base {
            BaseCase::Passthrough => {
                dst[0] = src[0];
                return Ok(());
            }
            BaseCase::Radix2 => {
                for (block, &offset) in dst.chunks_exact_mut(2).zip(self.bit_rev.iter()) {
                    single_radix2(block, src, offset, stride);
                }
            }
            BaseCase::Radix4 => {
                for (block, &offset) in dst.chunks_exact_mut(4).zip(self.bit_rev.iter()) {
                    single_radix4(block, src, offset, stride, direction);
                }
            }
        }

        let mut len = (n / stride) * 4;
        while len <= n {
            let quarter = len / 4;
            let twiddle_stride = n / len;

            unsafe {
                for data in dst.chunks_exact_mut(len) {
                    let mut k = 0usize;
                    for j in 0..quarter {
                        let a = *data.get_unchecked(j);
                        let b = *data.get_unchecked(j + quarter) * self.twiddle(k, direction);
                        let c = *data.get_unchecked(j + 2 * quarter) * self.twiddle(2 * k, direction);
                        let d = *data.get_unchecked(j + 3 * quarter) * self.twiddle(3 * k, direction);

                        // radix-4 butterfly
                        let t0 = a + c;
                        let t1 = a - c;
                        let t2 = b + d;
                        let t3 = rotate_90(b - d, direction);

                        *data.get_unchecked_mut(j) = t0 + t2;
                        *data.get_unchecked_mut(j + quarter) = t1 + t3;
                        *data.get_unchecked_mut(j + 2 * quarter) = t0 - t2;
                        *data.get_unchecked_mut(j + 3 * quarter) = t1 - t3;

                        k += twiddle_stride;
                    }
                }
            }

            len *= 4;
        }

        Ok(())
    }
}
