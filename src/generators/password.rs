use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha20Rng;

use crate::models::{
    Adjustment, AdjustmentReason, GeneratedPassword, GenerationOutcome, GenerationRequest,
};

/// Builds passwords from a [`GenerationRequest`].
///
/// The generator owns its random source. `new()` seeds a ChaCha20 CSPRNG from
/// OS entropy; `with_seed()` gives reproducible output for the same request.
pub struct PasswordGenerator<R = ChaCha20Rng> {
    rng: R,
}

impl PasswordGenerator<ChaCha20Rng> {
    pub fn new() -> Self {
        Self::from_rng(ChaCha20Rng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl Default for PasswordGenerator<ChaCha20Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    /// Generate a password, or report how the request must be corrected.
    ///
    /// A corrected request never yields a password on the same call; the
    /// caller applies `Adjustment::corrected` and calls again.
    pub fn generate(&mut self, request: &GenerationRequest) -> GenerationOutcome {
        let classes = request.enabled_classes();

        if classes.is_empty() {
            let mut corrected = request.clone();
            corrected.include_lowercase = true;
            log::warn!("No character class selected, enabling lowercase");
            return GenerationOutcome::NeedsAdjustment(Adjustment {
                reason: AdjustmentReason::NoClassSelected,
                corrected,
            });
        }

        let pool = request.pool();

        if request.length < classes.len() {
            let mut corrected = request.clone();
            corrected.length = classes.len();
            log::warn!(
                "Length {} cannot cover {} character classes, raising to {}",
                request.length,
                classes.len(),
                classes.len()
            );
            return GenerationOutcome::NeedsAdjustment(Adjustment {
                reason: AdjustmentReason::LengthBelowClassCount {
                    requested: request.length,
                    required: classes.len(),
                },
                corrected,
            });
        }

        let mut password = Vec::with_capacity(request.length);

        // One from each class first so every enabled class is covered
        for class in &classes {
            password.push(self.pick(class.alphabet().as_bytes()));
        }

        while password.len() < request.length {
            let index = self.rng.gen_range(0..pool.len());
            password.push(pool[index]);
        }

        password.shuffle(&mut self.rng);

        log::debug!(
            "Generated password of length {} from a pool of {} characters",
            password.len(),
            pool.len()
        );

        GenerationOutcome::Generated(GeneratedPassword::from(password))
    }

    /// Keep applying corrections until a password comes out.
    ///
    /// Returns the password together with every adjustment that was applied,
    /// in order. At most two rounds of correction are ever needed.
    pub fn resolve(&mut self, request: &GenerationRequest) -> (GeneratedPassword, Vec<Adjustment>) {
        let mut current = request.clone();
        let mut adjustments = Vec::new();

        loop {
            match self.generate(&current) {
                GenerationOutcome::Generated(password) => return (password, adjustments),
                GenerationOutcome::NeedsAdjustment(adjustment) => {
                    current = adjustment.corrected.clone();
                    adjustments.push(adjustment);
                }
            }
        }
    }

    fn pick(&mut self, alphabet: &[u8]) -> char {
        alphabet[self.rng.gen_range(0..alphabet.len())] as char
    }
}
