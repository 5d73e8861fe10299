use plain_enum::*;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EnumSet<E: PlainEnum>(EnumMap<E, bool>)
    where
        E::EnumMapArray<bool>: Eq,
;

impl<E: PlainEnum + Copy> EnumSet<E>
    where
        E::EnumMapArray<bool>: Eq,
{
    pub fn new_empty() -> Self {
        Self(E::map_from_fn(|_e| false))
    }

    pub fn new_from_fn(fn_contained: impl FnMut(E)->bool) -> Self {
        Self(E::map_from_fn(fn_contained))
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|b| !b)
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|b| *b)
    }

    pub fn contains(&self, e: E) -> bool {
        self.0[e]
    }

    pub fn insert(&mut self, e: E) -> bool {
        let b_newly_inserted = !self.0[e];
        self.0[e] = true;
        b_newly_inserted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    plain_enum_mod!(modetest, ETest {
        A, B, C,
    });

    #[test]
    fn test_enumset() {
        let mut sete = EnumSet::new_empty();
        assert!(sete.is_empty());
        assert!(!sete.contains(ETest::A));
        assert!(sete.insert(ETest::A));
        assert!(!sete.insert(ETest::A));
        assert!(sete.contains(ETest::A));
        assert!(!sete.is_full());
        sete.insert(ETest::B);
        sete.insert(ETest::C);
        assert!(sete.is_full());
    }
}
