/// Single-character selector for a number predicate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Qualifier {
    /// `p`
    Prime,
    /// `f`
    Fibonacci,
    /// `e`
    Even,
    /// `r`: matches everything.
    Random,
}

impl Qualifier {
    /// Map a wire code to a qualifier. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "p" => Some(Self::Prime),
            "f" => Some(Self::Fibonacci),
            "e" => Some(Self::Even),
            "r" => Some(Self::Random),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Prime => "p",
            Self::Fibonacci => "f",
            Self::Even => "e",
            Self::Random => "r",
        }
    }

    pub fn matches(&self, n: i64) -> bool {
        match self {
            Self::Prime => is_prime(n),
            Self::Fibonacci => is_fibonacci(n),
            Self::Even => is_even(n),
            Self::Random => true,
        }
    }
}

/// Trial division. Anything `<= 1` is not prime.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let mut i = 2;
    // `i <= n / i` is `i * i <= n` without overflow.
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Walks 1, 1, 2, 3, 5, ... until a term reaches `n`.
///
/// The walk starts at 1, so 0 is never matched.
pub fn is_fibonacci(n: i64) -> bool {
    let (mut a, mut b): (i64, i64) = (0, 1);
    while b <= n {
        if b == n {
            return true;
        }
        let Some(next) = a.checked_add(b) else {
            return false;
        };
        a = b;
        b = next;
    }
    false
}

pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}
