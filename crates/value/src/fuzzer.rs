use crate::collections::ViewKind;
use crate::value::{BoxedValue, Value};
use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::sync::{Arc, Mutex};

/// A fuzzer for generating random test data, including random runtime
/// value trees.
///
/// Uses the xoshiro256** PRNG for reproducible random sequences when seeded.
///
/// # Examples
///
/// ```
/// use valuekit_value::Fuzzer;
///
/// let fuzzer = Fuzzer::new(Some([7u8; 32]));
///
/// let n = fuzzer.random_int(1, 10);
/// assert!(n >= 1 && n <= 10);
///
/// // Random value trees terminate at the requested depth.
/// let value = fuzzer.random_value(3);
/// let _ = value.type_tag();
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Arc<Mutex<Xoshiro256StarStar>>,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        let rng = Xoshiro256StarStar::from_seed(seed);

        Self {
            seed,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        let mut rng = self.rng.lock().unwrap();
        rng.gen_range(min..=max)
    }

    /// Pick a random element from a slice.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> &'a T {
        let mut rng = self.rng.lock().unwrap();
        let idx = rng.gen_range(0..elements.len());
        &elements[idx]
    }

    /// Repeat a callback `times` times and collect results.
    pub fn repeat<T, F>(&self, times: usize, mut callback: F) -> Vec<T>
    where
        F: FnMut() -> T,
    {
        (0..times).map(|_| callback()).collect()
    }

    /// Generate a random f64 in the range [0, 1).
    pub fn random(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap();
        rng.gen::<f64>()
    }

    /// Generate a random byte array of the specified length.
    pub fn random_bytes(&self, len: usize) -> Vec<u8> {
        let mut rng = self.rng.lock().unwrap();
        let mut bytes = vec![0u8; len];
        rng.fill_bytes(&mut bytes);
        bytes
    }

    /// Generate a random boolean with the given probability of being true.
    pub fn random_bool(&self, probability: f64) -> bool {
        let mut rng = self.rng.lock().unwrap();
        rng.gen_bool(probability)
    }

    /// Generate a random string of the specified length from the given characters.
    pub fn random_string(&self, len: usize, chars: &str) -> String {
        let chars: Vec<char> = chars.chars().collect();
        let mut rng = self.rng.lock().unwrap();
        (0..len)
            .map(|_| chars[rng.gen_range(0..chars.len())])
            .collect()
    }

    /// Generate a random primitive value.
    pub fn random_primitive(&self) -> Value {
        match self.random_int(0, 6) {
            0 => Value::Undefined,
            1 => Value::Null,
            2 => Value::Bool(self.random_bool(0.5)),
            3 => match self.random_int(0, 4) {
                0 => Value::Number(f64::NAN),
                1 => Value::Number(-0.0),
                _ => Value::Number(self.random_int(-1000, 1000) as f64 / 8.0),
            },
            4 => Value::BigInt(self.random_int(-1000, 1000) as i128),
            5 => Value::string(&self.random_string(self.random_int(0, 8) as usize, "abcxyz")),
            _ => Value::Number(self.random_int(0, 100) as f64),
        }
    }

    /// Generate a random value tree with the given maximum depth.
    ///
    /// Depth 0 always yields a primitive.
    pub fn random_value(&self, depth: usize) -> Value {
        if depth == 0 {
            return self.random_primitive();
        }
        match self.random_int(0, 9) {
            0 => Value::array(
                self.repeat(self.random_int(0, 4) as usize, || {
                    self.random_value(depth - 1)
                }),
            ),
            1 => {
                let len = self.random_int(0, 4) as usize;
                Value::object((0..len).map(|i| {
                    (
                        format!("k{}", i).into(),
                        self.random_value(depth - 1),
                    )
                }))
            }
            2 => Value::date(self.random_int(0, 1_000_000) as f64),
            3 => Value::regexp(&self.random_string(3, "abc"), "g"),
            4 => Value::map(self.repeat(self.random_int(0, 3) as usize, || {
                (self.random_primitive(), self.random_value(depth - 1))
            })),
            5 => Value::set(self.repeat(self.random_int(0, 3) as usize, || {
                self.random_value(depth - 1)
            })),
            6 => Value::array_buffer(self.random_bytes(self.random_int(0, 8) as usize)),
            7 => Value::view(
                *self.pick(&[ViewKind::Uint8, ViewKind::Int32, ViewKind::Float64]),
                self.random_bytes(self.random_int(0, 8) as usize),
            ),
            8 => Value::boxed(match self.random_int(0, 2) {
                0 => BoxedValue::Number(self.random_int(0, 100) as f64),
                1 => BoxedValue::Boolean(self.random_bool(0.5)),
                _ => BoxedValue::String("boxed".into()),
            }),
            _ => self.random_primitive(),
        }
    }
}
