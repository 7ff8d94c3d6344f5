/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
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
use crate::radix4::Radix4;
use crate::util::compute_twiddle;
use crate::{FftDirection, FftSample, RafftError};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Real-to-complex forward transform for even lengths.
///
/// Consecutive real sample pairs are packed as one complex sample each, a
/// half-length complex transform runs on the packed sequence, and the
/// conjugate-symmetric recombination recovers true spectrum bins 0..=N/2.
pub(crate) struct R2CEven<T> {
    half: Radix4<T>,
    twiddles: Vec<Complex<T>>,
    length: usize,
}

impl<T: FftSample> R2CEven<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn install(length: usize) -> Result<R2CEven<T>, RafftError> {
        debug_assert_eq!(length % 2, 0, "real transform length must be even");

        let twiddle_count = if length % 4 == 0 {
            length / 4
        } else {
            length / 4 + 1
        };
        let mut twiddles = try_vec![Complex::<T>::zero(); twiddle_count - 1];
        for (i, twiddle) in twiddles.iter_mut().enumerate() {
            *twiddle = compute_twiddle(i + 1, length, FftDirection::Forward) * 0.5f64.as_();
        }

        Ok(R2CEven {
            half: Radix4::new(length / 2)?,
            twiddles,
            length,
        })
    }

    pub(crate) fn execute(&self, output: &mut [Complex<T>], input: &[T]) -> Result<(), RafftError> {
        if input.len() != self.length {
            return Err(RafftError::InvalidLength(self.length, input.len()));
        }
        if output.len() != self.length {
            return Err(RafftError::InvalidLength(self.length, output.len()));
        }

        let half_length = self.half.length();

        let mut packed = try_vec![Complex::<T>::zero(); half_length];
        for (dst, pair) in packed.iter_mut().zip(input.chunks_exact(2)) {
            *dst = Complex::new(pair[0], pair[1]);
        }

        self.half
            .execute(&mut output[..half_length], &packed, FftDirection::Forward)?;

        let spectrum = &mut output[..half_length + 1];
        let (mut left, mut right) = spectrum.split_at_mut((half_length + 1) / 2);

        // The first and last bin need no twiddle factors, they are the sum
        // and difference of the packed DC bin's components.
        match (left.first_mut(), right.last_mut()) {
            (Some(first_bin), Some(last_bin)) => {
                let packed_dc = *first_bin;
                *first_bin = Complex {
                    re: packed_dc.re + packed_dc.im,
                    im: T::zero(),
                };
                *last_bin = Complex {
                    re: packed_dc.re - packed_dc.im,
                    im: T::zero(),
                };

                left = &mut left[1..];
                let right_len = right.len();
                right = &mut right[..right_len - 1];
            }
            _ => return Ok(()),
        }

        let half: T = 0.5f64.as_();

        for ((twiddle, bin), bin_rev) in self
            .twiddles
            .iter()
            .zip(left.iter_mut())
            .zip(right.iter_mut().rev())
        {
            let sum = *bin + *bin_rev;
            let diff = *bin - *bin_rev;

            let twiddled_re_sum = sum.im * twiddle.re;
            let twiddled_im_sum = sum.im * twiddle.im;
            let twiddled_re_diff = diff.re * twiddle.re;
            let twiddled_im_diff = diff.re * twiddle.im;

            let half_sum_re = half * sum.re;
            let half_diff_im = half * diff.im;

            let twiddled_re = twiddled_re_sum + twiddled_im_diff;
            let twiddled_im = twiddled_im_sum - twiddled_re_diff;

            *bin = Complex {
                re: half_sum_re + twiddled_re,
                im: half_diff_im + twiddled_im,
            };
            *bin_rev = Complex {
                re: half_sum_re - twiddled_re,
                im: twiddled_im - half_diff_im,
            };
        }

        // The self-paired center bin is the conjugate of the packed bin.
        if spectrum.len() % 2 == 1 {
            let center = spectrum.len() / 2;
            spectrum[center].im = -spectrum[center].im;
        }

        Ok(())
    }
}

/// Mirrors bins 1..N/2 into the upper half by conjugate symmetry. Bins 0
/// and N/2 are purely real already and stay untouched.
pub(crate) fn complete_spectrum<T: FftSample>(spectrum: &mut [Complex<T>]) {
    let half = spectrum.len() / 2;
    let (front, back) = spectrum.split_at_mut(half + 1);
    for (dst, src) in back.iter_mut().rev().zip(front[1..half].iter()) {
        *dst = src.conj();
    }
}
