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
use crate::FftDirection;
use num_complex::Complex;
use num_traits::Num;
use std::ops::Neg;

pub(crate) fn rotate_90<T: Copy + Neg<Output = T>>(
    value: Complex<T>,
    direction: FftDirection,
) -> Complex<T> {
    match direction {
        FftDirection::Forward => Complex {
            re: value.im,
            im: -value.re,
        },
        FftDirection::Inverse => Complex {
            re: -value.im,
            im: value.re,
        },
    }
}

/// Length-2 DFT of `input[offset]` and `input[offset + stride]` written to
/// the first two slots of `block`. The pair combine needs no twiddle.
#[inline]
pub(crate) fn single_radix2<T: Copy + Num>(
    block: &mut [Complex<T>],
    input: &[Complex<T>],
    offset: usize,
    stride: usize,
) {
    let even = input[offset];
    let odd = input[offset + stride];

    block[0] = even + odd;
    block[1] = even - odd;
}

/// Length-4 DFT of four input elements strided by `stride`, starting at
/// `offset`, written to the first four slots of `block`.
#[inline]
pub(crate) fn single_radix4<T: Copy + Num + Neg<Output = T>>(
    block: &mut [Complex<T>],
    input: &[Complex<T>],
    offset: usize,
    stride: usize,
    direction: FftDirection,
) {
    let a = input[offset];
    let b = input[offset + stride];
    let c = input[offset + 2 * stride];
    let d = input[offset + 3 * stride];

    let t0 = a + c;
    let t1 = a - c;
    let t2 = b + d;
    let t3 = rotate_90(b - d, direction);

    block[0] = t0 + t2;
    block[1] = t1 + t3;
    block[2] = t0 - t2;
    block[3] = t1 - t3;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::compute_twiddle;

    fn reference_dft4(
        input: &[Complex<f64>],
        offset: usize,
        stride: usize,
        direction: FftDirection,
    ) -> Vec<Complex<f64>> {
        let mut out = vec![Complex::default(); 4];
        for (k, dst) in out.iter_mut().enumerate() {
            let mut sum = Complex::new(0.0, 0.0);
            for j in 0..4 {
                sum = sum + input[offset + j * stride] * compute_twiddle::<f64>(k * j, 4, direction);
            }
            *dst = sum;
        }
        out
    }

    #[test]
    fn test_single_radix2() {
        let input = vec![
            Complex::new(0.5, -1.0),
            Complex::new(3.0, 2.0),
            Complex::new(-1.5, 0.25),
            Complex::new(2.0, 1.0),
        ];
        let mut block = vec![Complex::default(); 2];
        single_radix2(&mut block, &input, 1, 2);

        assert_eq!(block[0], Complex::new(5.0, 3.0));
        assert_eq!(block[1], Complex::new(1.0, 1.0));
    }

    #[test]
    fn test_single_radix4() {
        let mut input = vec![Complex::default(); 8];
        for (i, z) in input.iter_mut().enumerate() {
            *z = Complex::new(1.0 + i as f64 * 0.5, -0.75 * i as f64);
        }

        for direction in [FftDirection::Forward, FftDirection::Inverse] {
            let mut block = vec![Complex::default(); 4];
            single_radix4(&mut block, &input, 1, 2, direction);

            let reference = reference_dft4(&input, 1, 2, direction);
            for (k, (a, b)) in block.iter().zip(reference.iter()).enumerate() {
                assert!(
                    (a.re - b.re).abs() < 1e-12 && (a.im - b.im).abs() < 1e-12,
                    "bin {} mismatch: ({}, {}) != ({}, {})",
                    k,
                    a.re,
                    a.im,
                    b.re,
                    b.im
                );
            }
        }
    }
}
