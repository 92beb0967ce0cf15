//! Internal macros for fixed-profile hasher types.

/// Generate a hasher type over a catalogue engine.
///
/// This macro creates:
/// - The struct definition with a raw register `state: u64`
/// - `resume()` and `engine()` associated functions
/// - `Default` delegating to `Checksum::new`
/// - The `Checksum` trait implementation, narrowing results to `$out`
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Crc32`)
/// - `$engine`: The catalogue static (e.g., `catalog::CRC32_ISO`)
/// - `$out`: Output integer type; must hold `width` bits
macro_rules! define_crc_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      engine: $engine:path,
      output: $out:ty,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Debug)]
    $vis struct $name {
      state: u64,
    }

    impl $name {
      /// Create a hasher that continues from a previously returned checksum.
      #[inline]
      #[must_use]
      pub fn resume(crc: $out) -> Self {
        Self {
          state: $engine.resume_register(u64::from(crc)),
        }
      }

      /// The compile-time engine behind this type.
      #[inline]
      #[must_use]
      pub fn engine() -> &'static $crate::CrcEngine {
        &$engine
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        <Self as $crate::Checksum>::new()
      }
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = core::mem::size_of::<$out>();
      type Output = $out;

      #[inline]
      fn new() -> Self {
        Self {
          state: $engine.seed_register(),
        }
      }

      #[inline]
      fn with_initial(initial: $out) -> Self {
        Self {
          state: $engine.align_register(u64::from(initial)),
        }
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.state = $engine.fold(self.state, data);
      }

      #[inline]
      fn finalize(&self) -> $out {
        // The finished value is masked to `width` bits, which `$out` holds.
        $engine.finish_register(self.state) as $out
      }

      #[inline]
      fn reset(&mut self) {
        self.state = $engine.seed_register();
      }
    }
  };
}
