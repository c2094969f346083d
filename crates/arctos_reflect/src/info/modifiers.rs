use core::fmt;

bitflags::bitflags! {
    /// Access and shape flags of a type or member.
    ///
    /// Only one of `PUBLIC`, `PROTECTED` and `PRIVATE` is expected to be set,
    /// none of them means package (crate) visibility.
    ///
    /// # Examples
    ///
    /// ```
    /// use arctos_reflect::info::Modifiers;
    ///
    /// let m = Modifiers::PUBLIC | Modifiers::ABSTRACT;
    /// assert!(m.is_public());
    /// assert!(m.is_abstract());
    /// assert!(!m.is_final());
    /// assert_eq!(m.to_string(), "public abstract");
    /// ```
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u16 {
        const PUBLIC    = 1 << 0;
        const PRIVATE   = 1 << 1;
        const PROTECTED = 1 << 2;
        const STATIC    = 1 << 3;
        const FINAL     = 1 << 4;
        const ABSTRACT  = 1 << 5;
        const INTERFACE = 1 << 6;
    }
}

impl Modifiers {
    #[inline]
    pub const fn is_public(self) -> bool {
        self.contains(Self::PUBLIC)
    }

    #[inline]
    pub const fn is_private(self) -> bool {
        self.contains(Self::PRIVATE)
    }

    #[inline]
    pub const fn is_protected(self) -> bool {
        self.contains(Self::PROTECTED)
    }

    #[inline]
    pub const fn is_static(self) -> bool {
        self.contains(Self::STATIC)
    }

    #[inline]
    pub const fn is_final(self) -> bool {
        self.contains(Self::FINAL)
    }

    #[inline]
    pub const fn is_abstract(self) -> bool {
        self.contains(Self::ABSTRACT)
    }

    #[inline]
    pub const fn is_interface(self) -> bool {
        self.contains(Self::INTERFACE)
    }
}

impl fmt::Display for Modifiers {
    /// Keywords in the conventional declaration order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const ORDER: [(Modifiers, &str); 7] = [
            (Modifiers::PUBLIC, "public"),
            (Modifiers::PROTECTED, "protected"),
            (Modifiers::PRIVATE, "private"),
            (Modifiers::ABSTRACT, "abstract"),
            (Modifiers::STATIC, "static"),
            (Modifiers::FINAL, "final"),
            (Modifiers::INTERFACE, "interface"),
        ];

        let mut first = true;
        for (flag, keyword) in ORDER {
            if self.contains(flag) {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(keyword)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Modifiers;

    #[test]
    fn empty_modifiers_display_nothing() {
        assert_eq!(Modifiers::empty().to_string(), "");
    }

    #[test]
    fn private_static_order() {
        let m = Modifiers::STATIC | Modifiers::PRIVATE;
        assert_eq!(m.to_string(), "private static");
        assert!(m.is_private() && m.is_static());
        assert!(!m.is_public());
    }
}
