/// Returns `true` if `sub` occurs within `s`,
/// using ASCII case insensitive comparison.
///
/// This is a convenience wrapper around [`contains_ignore_ascii_case`].
pub fn submatch_ignore_ascii_case<T1, T2>(s: T1, sub: T2) -> bool
where
    T1: AsRef<[u8]>,
    T2: AsRef<[u8]>,
{
    contains_ignore_ascii_case(s, sub).is_some()
}

/// Returns `true` if any item produced by `sub_iter` occurs within `s`,
/// using ASCII case insensitive comparison.
///
/// This is a convenience wrapper around [`any_contains_ignore_ascii_case`].
pub fn any_submatch_ignore_ascii_case<T, I>(s: T, sub_iter: I) -> bool
where
    T: AsRef<[u8]>,
    I: IntoIterator<Item: AsRef<[u8]>>,
{
    any_contains_ignore_ascii_case(s, sub_iter).is_some()
}

/// Finds the first occurrence of `sub` within `s`,
/// using ASCII case insensitive comparison.
///
/// The returned index is a byte offset into `s`.
/// If `sub` is empty, this returns `Some(0)`.
pub fn contains_ignore_ascii_case<T1, T2>(s: T1, sub: T2) -> Option<usize>
where
    T1: AsRef<[u8]>,
    T2: AsRef<[u8]>,
{
    let s = s.as_ref();
    let sub = sub.as_ref();

    let n = sub.len();

    if n == 0 {
        return Some(0);
    }

    s.windows(n)
        .position(|window| window.eq_ignore_ascii_case(sub))
}

/// Finds the first match of any substring from `sub_iter` within `s`,
/// using ASCII case insensitive comparison.
///
/// The returned index is a byte offset into `s`.
/// Iteration order decides which candidate is considered first.
#[inline(always)]
pub fn any_contains_ignore_ascii_case<T, I>(s: T, sub_iter: I) -> Option<usize>
where
    T: AsRef<[u8]>,
    I: IntoIterator<Item: AsRef<[u8]>>,
{
    let haystack = s.as_ref();
    sub_iter
        .into_iter()
        .find_map(|sub| contains_ignore_ascii_case(haystack, sub))
}

/// Iterates over the byte offsets of every (possibly overlapping) occurrence
/// of `sub` within `s`, using ASCII case insensitive comparison.
///
/// An empty `sub` never matches.
pub fn match_indices_ignore_ascii_case<'a>(
    s: &'a str,
    sub: &'a str,
) -> impl Iterator<Item = usize> + 'a {
    let haystack = s.as_bytes();
    let needle = sub.as_bytes();
    let n = needle.len();

    (0..haystack.len().saturating_sub(n).saturating_add(1)).filter(move |&i| {
        n > 0
            && haystack
                .get(i..i + n)
                .is_some_and(|window| window.eq_ignore_ascii_case(needle))
    })
}

/// Finds the first occurrence of `sub` within `s` that is delimited
/// by word boundaries on both sides, using ASCII case insensitive comparison.
///
/// Word characters are ASCII alphanumerics and `_`, the same set
/// a `\b` regex anchor considers. An empty `sub` never matches.
pub fn contains_word_ignore_ascii_case<T1, T2>(s: T1, sub: T2) -> Option<usize>
where
    T1: AsRef<[u8]>,
    T2: AsRef<[u8]>,
{
    let s = s.as_ref();
    let sub = sub.as_ref();

    let n = sub.len();
    if n == 0 {
        return None;
    }

    s.windows(n).enumerate().find_map(|(i, window)| {
        let before = i.checked_sub(1).and_then(|j| s.get(j));
        let after = s.get(i + n);
        (window.eq_ignore_ascii_case(sub)
            && !before.is_some_and(is_word_byte)
            && !after.is_some_and(is_word_byte))
        .then_some(i)
    })
}

#[inline]
fn is_word_byte(b: &u8) -> bool {
    b.is_ascii_alphanumeric() || *b == b'_'
}
