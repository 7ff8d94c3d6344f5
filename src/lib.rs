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
mod butterflies;
mod err;
mod r2c;
mod radix4;
mod util;

pub use err::RafftError;
pub use num_complex::Complex;

use crate::err::try_vec;
use crate::r2c::R2CEven;
use crate::radix4::Radix4;
use num_traits::{AsPrimitive, Num, Zero};
use std::fmt::Debug;
use std::ops::Neg;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub(crate) enum FftDirection {
    Forward,
    Inverse,
}

/// Floating-point sample types the transform is defined over.
pub trait FftSample: Copy + Default + Debug + Num + Neg<Output = Self> + 'static {}

impl FftSample for f32 {}
impl FftSample for f64 {}

/// Transform engine for one power-of-two size.
///
/// All tables are built once at construction and are read-only afterwards;
/// every operation takes `&self` and caller-supplied buffers, so a single
/// engine may be shared across threads.
///
/// Complex sequences are slices of [`Complex`], whose `repr(C)` layout is
/// the interleaved real/imaginary representation. Forward transforms are
/// unnormalized; the inverse divides by the transform size.
pub struct Fft<T> {
    size: usize,
    engine: Radix4<T>,
    real: R2CEven<T>,
}

impl<T: FftSample> Fft<T>
where
    f64: AsPrimitive<T>,
{
    /// Builds an engine for `size` points. `size` must be a power of two
    /// greater than 1; anything else fails here, never in a transform call.
    pub fn new(size: usize) -> Result<Fft<T>, RafftError> {
        if size <= 1 || !size.is_power_of_two() {
            return Err(RafftError::InvalidSize(size));
        }

        Ok(Fft {
            size,
            engine: Radix4::new(size)?,
            real: R2CEven::install(size)?,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Zero-filled complex buffer sized to the engine.
    pub fn create_complex_array(&self) -> Result<Vec<Complex<T>>, RafftError> {
        Ok(try_vec![Complex::<T>::default(); self.size])
    }

    /// Interleaves real samples with zero imaginary parts.
    pub fn to_complex_array(&self, input: &[T]) -> Result<Vec<Complex<T>>, RafftError> {
        if input.len() != self.size {
            return Err(RafftError::InvalidLength(self.size, input.len()));
        }

        let mut complex = try_vec![Complex::<T>::default(); self.size];
        for (dst, &src) in complex.iter_mut().zip(input.iter()) {
            *dst = Complex::new(src, T::zero());
        }
        Ok(complex)
    }

    /// Extracts the real components of a complex sequence.
    pub fn from_complex_array(&self, complex: &[Complex<T>]) -> Result<Vec<T>, RafftError> {
        if complex.len() != self.size {
            return Err(RafftError::InvalidLength(self.size, complex.len()));
        }

        let mut real = try_vec![T::zero(); self.size];
        for (dst, src) in real.iter_mut().zip(complex.iter()) {
            *dst = src.re;
        }
        Ok(real)
    }

    /// Forward DFT of `input` into `output`. The buffers must be distinct;
    /// an aliased pair is rejected before anything is written.
    pub fn transform(
        &self,
        output: &mut [Complex<T>],
        input: &[Complex<T>],
    ) -> Result<(), RafftError> {
        if std::ptr::eq(output.as_ptr(), input.as_ptr()) {
            return Err(RafftError::AliasedBuffers);
        }
        self.engine.execute(output, input, FftDirection::Forward)
    }

    /// Inverse DFT of `input` into `output`: the forward network with
    /// conjugated twiddles, then every output sample divided by the size.
    pub fn inverse_transform(
        &self,
        output: &mut [Complex<T>],
        input: &[Complex<T>],
    ) -> Result<(), RafftError> {
        if std::ptr::eq(output.as_ptr(), input.as_ptr()) {
            return Err(RafftError::AliasedBuffers);
        }
        self.engine.execute(output, input, FftDirection::Inverse)?;

        let scale: T = (1.0 / self.size as f64).as_();
        for value in output.iter_mut() {
            *value = *value * scale;
        }
        Ok(())
    }

    /// Forward DFT of a real sequence through a half-length complex
    /// transform. Fills spectrum bins 0..=N/2 of `output`; the remaining
    /// bins follow by conjugate symmetry via [`Fft::complete_spectrum`].
    pub fn real_transform(
        &self,
        output: &mut [Complex<T>],
        input: &[T],
    ) -> Result<(), RafftError> {
        if output.as_ptr() as *const u8 == input.as_ptr() as *const u8 {
            return Err(RafftError::AliasedBuffers);
        }
        self.real.execute(output, input)
    }

    /// Mirrors bins 1..N/2 into bins N/2+1..N-1 as conjugates. Bins 0 and
    /// N/2 are purely real and stay untouched.
    pub fn complete_spectrum(&self, spectrum: &mut [Complex<T>]) -> Result<(), RafftError> {
        if spectrum.len() != self.size {
            return Err(RafftError::InvalidLength(self.size, spectrum.len()));
        }
        r2c::complete_spectrum(spectrum);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn fix_round(value: f64) -> f64 {
        (value * 1000.0).round() / 1000.0
    }

    #[test]
    fn test_construction_validates_size() {
        for size in [0usize, 1, 3, 7, 9, 100, 16383] {
            assert!(
                matches!(Fft::<f64>::new(size), Err(RafftError::InvalidSize(s)) if s == size),
                "size {} must be rejected",
                size
            );
        }

        let mut size = 2usize;
        while size <= 16384 {
            assert!(Fft::<f64>::new(size).is_ok(), "size {} must be accepted", size);
            assert!(Fft::<f32>::new(size).is_ok(), "size {} must be accepted", size);
            size <<= 1;
        }
    }

    #[test]
    fn test_complex_array_conversions() {
        let fft = Fft::<f64>::new(4).unwrap();

        let complex = fft.to_complex_array(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(
            complex,
            vec![
                Complex::new(1.0, 0.0),
                Complex::new(2.0, 0.0),
                Complex::new(3.0, 0.0),
                Complex::new(4.0, 0.0),
            ]
        );

        let real = fft.from_complex_array(&complex).unwrap();
        assert_eq!(real, vec![1.0, 2.0, 3.0, 4.0]);

        let zeros = fft.create_complex_array().unwrap();
        assert_eq!(zeros, vec![Complex::default(); 4]);
    }

    #[test]
    fn test_transform_trivial_size_2() {
        let fft = Fft::<f64>::new(2).unwrap();
        let mut output = fft.create_complex_array().unwrap();

        let data = fft.to_complex_array(&[0.5, -0.5]).unwrap();
        fft.transform(&mut output, &data).unwrap();
        assert_eq!(output, vec![Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)]);

        let data = fft.to_complex_array(&[0.5, 0.5]).unwrap();
        fft.transform(&mut output, &data).unwrap();
        assert_eq!(output, vec![Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)]);

        // Linear combination
        let data = fft.to_complex_array(&[1.0, 0.0]).unwrap();
        fft.transform(&mut output, &data).unwrap();
        assert_eq!(output, vec![Complex::new(1.0, 0.0), Complex::new(1.0, 0.0)]);
    }

    #[test]
    fn test_transform_size_4() {
        let fft = Fft::<f64>::new(4).unwrap();
        let mut output = fft.create_complex_array().unwrap();

        let data = fft
            .to_complex_array(&[1.0, 0.707106, 0.0, -0.707106])
            .unwrap();
        fft.transform(&mut output, &data).unwrap();

        let rounded: Vec<(f64, f64)> = output
            .iter()
            .map(|z| (fix_round(z.re), fix_round(z.im)))
            .collect();
        assert_eq!(
            rounded,
            vec![(1.0, 0.0), (1.0, -1.414), (1.0, 0.0), (1.0, 1.414)]
        );

        let data = fft.to_complex_array(&[1.0, 0.0, -1.0, 0.0]).unwrap();
        fft.transform(&mut output, &data).unwrap();
        assert_eq!(
            output,
            vec![
                Complex::new(0.0, 0.0),
                Complex::new(2.0, 0.0),
                Complex::new(0.0, 0.0),
                Complex::new(2.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_inverse_roundtrip() {
        for &size in [2usize, 4, 8, 16, 512, 1024, 2048, 4096].iter() {
            let fft = Fft::<f64>::new(size).unwrap();

            let mut input = fft.create_complex_array().unwrap();
            for z in input.iter_mut() {
                *z = Complex::new(
                    rand::rng().random::<f64>() - 0.5,
                    rand::rng().random::<f64>() - 0.5,
                );
            }

            let mut spectrum = fft.create_complex_array().unwrap();
            let mut restored = fft.create_complex_array().unwrap();
            fft.transform(&mut spectrum, &input).unwrap();
            fft.inverse_transform(&mut restored, &spectrum).unwrap();

            for (k, (a, b)) in restored.iter().zip(input.iter()).enumerate() {
                assert!(
                    (a.re - b.re).abs() < 1e-9 && (a.im - b.im).abs() < 1e-9,
                    "sample {} of size {}: ({}, {}) != ({}, {})",
                    k,
                    size,
                    a.re,
                    a.im,
                    b.re,
                    b.im
                );
            }
        }
    }

    #[test]
    fn test_inverse_scales_exactly_once() {
        let fft = Fft::<f64>::new(8).unwrap();

        // The spectrum of an all-ones signal is a single spike of height N.
        let mut spectrum = fft.create_complex_array().unwrap();
        spectrum[0] = Complex::new(8.0, 0.0);

        let mut restored = fft.create_complex_array().unwrap();
        fft.inverse_transform(&mut restored, &spectrum).unwrap();

        for (k, z) in restored.iter().enumerate() {
            assert!(
                (z.re - 1.0).abs() < 1e-12 && z.im.abs() < 1e-12,
                "sample {}: ({}, {})",
                k,
                z.re,
                z.im
            );
        }
    }

    #[test]
    fn test_real_transform_matches_complex_path() {
        for &size in [2usize, 4, 8, 16, 512, 1024, 2048, 4096].iter() {
            let fft = Fft::<f64>::new(size).unwrap();

            let ascending: Vec<f64> = (0..size).map(|i| i as f64).collect();
            let sinusoid: Vec<f64> = (0..size)
                .map(|i| (2.0 * std::f64::consts::PI * 3.0 * i as f64 / size as f64).sin())
                .collect();
            let random: Vec<f64> = (0..size)
                .map(|_| rand::rng().random::<f64>() - 0.5)
                .collect();

            for input in [&ascending, &sinusoid, &random] {
                let mut real_spectrum = fft.create_complex_array().unwrap();
                fft.real_transform(&mut real_spectrum, input).unwrap();
                fft.complete_spectrum(&mut real_spectrum).unwrap();

                let data = fft.to_complex_array(input).unwrap();
                let mut reference = fft.create_complex_array().unwrap();
                fft.transform(&mut reference, &data).unwrap();

                let max_abs = input.iter().fold(0f64, |acc, x| acc.max(x.abs()));
                let tolerance = 1e-9 * size as f64 * (1.0 + max_abs);
                for (k, (a, b)) in real_spectrum.iter().zip(reference.iter()).enumerate() {
                    assert!(
                        (a.re - b.re).abs() < tolerance && (a.im - b.im).abs() < tolerance,
                        "bin {} of size {}: ({}, {}) != ({}, {})",
                        k,
                        size,
                        a.re,
                        a.im,
                        b.re,
                        b.im
                    );
                }
            }
        }
    }

    #[test]
    fn test_completed_spectrum_is_hermitian() {
        for &size in [4usize, 16, 256, 1024].iter() {
            let fft = Fft::<f64>::new(size).unwrap();

            let input: Vec<f64> = (0..size)
                .map(|_| rand::rng().random::<f64>() - 0.5)
                .collect();
            let mut spectrum = fft.create_complex_array().unwrap();
            fft.real_transform(&mut spectrum, &input).unwrap();
            fft.complete_spectrum(&mut spectrum).unwrap();

            assert_eq!(spectrum[0].im, 0.0);
            assert_eq!(spectrum[size / 2].im, 0.0);
            for k in 1..size / 2 {
                assert_eq!(
                    spectrum[size - k],
                    spectrum[k].conj(),
                    "bin {} of size {}",
                    k,
                    size
                );
            }
        }
    }

    #[test]
    fn test_transform_rejects_aliased_buffers() {
        let fft = Fft::<f64>::new(8).unwrap();
        let mut data = fft.create_complex_array().unwrap();
        let marker = Complex::new(0.125, -4.0);
        data[3] = marker;

        let ptr = data.as_mut_ptr();
        let len = data.len();
        // The call must fail before either view is read or written.
        let (output, input) = unsafe {
            (
                std::slice::from_raw_parts_mut(ptr, len),
                std::slice::from_raw_parts(ptr, len),
            )
        };

        assert!(matches!(
            fft.transform(output, input),
            Err(RafftError::AliasedBuffers)
        ));
        assert_eq!(data[3], marker);
    }

    #[test]
    fn test_length_validation() {
        let fft = Fft::<f64>::new(8).unwrap();

        assert!(matches!(
            fft.to_complex_array(&[1.0; 4]),
            Err(RafftError::InvalidLength(8, 4))
        ));

        let input = vec![Complex::default(); 8];
        let mut short = vec![Complex::default(); 4];
        assert!(matches!(
            fft.transform(&mut short, &input),
            Err(RafftError::InvalidLength(8, 4))
        ));

        let mut spectrum = vec![Complex::default(); 16];
        assert!(matches!(
            fft.complete_spectrum(&mut spectrum),
            Err(RafftError::InvalidLength(8, 16))
        ));
    }
}
