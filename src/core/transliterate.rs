//! Keyboard-layout transliteration
//!
//! Names typed with the Korean IME switched off come out as Latin letters
//! (`ghdrlfehd` instead of `홍길동`). [`DubeolsikTransliterator`] replays those
//! keystrokes through the standard 2-set (Dubeolsik) layout and composes the
//! resulting jamo into Hangul syllables.

/// Optional capability that converts romanized/keyboard-layout text to Hangul
pub trait Transliterator: Send + Sync {
    /// Convert `input`, returning `None` when no conversion applies
    fn transliterate(&self, input: &str) -> Option<String>;
}

/// Returns true for Hangul syllables and jamo (conjoining and compatibility)
pub fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{AC00}'..='\u{D7A3}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}')
}

/// Returns true if any character of `s` is Hangul
pub fn contains_hangul(s: &str) -> bool {
    s.chars().any(is_hangul)
}

const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ',
    'ㅍ', 'ㅎ',
];

const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ',
    'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

// Index 0 of the syllable formula means "no final"; this table starts at 1.
const JONGSEONG: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ',
    'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

const SYLLABLE_BASE: u32 = 0xAC00;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Jamo {
    Consonant(char),
    Vowel(char),
}

fn key_to_jamo(key: char) -> Option<Jamo> {
    use Jamo::{Consonant as C, Vowel as V};
    let jamo = match key {
        'Q' => C('ㅃ'),
        'W' => C('ㅉ'),
        'E' => C('ㄸ'),
        'R' => C('ㄲ'),
        'T' => C('ㅆ'),
        'O' => V('ㅒ'),
        'P' => V('ㅖ'),
        _ => match key.to_ascii_lowercase() {
            'q' => C('ㅂ'),
            'w' => C('ㅈ'),
            'e' => C('ㄷ'),
            'r' => C('ㄱ'),
            't' => C('ㅅ'),
            'a' => C('ㅁ'),
            's' => C('ㄴ'),
            'd' => C('ㅇ'),
            'f' => C('ㄹ'),
            'g' => C('ㅎ'),
            'z' => C('ㅋ'),
            'x' => C('ㅌ'),
            'c' => C('ㅊ'),
            'v' => C('ㅍ'),
            'y' => V('ㅛ'),
            'u' => V('ㅕ'),
            'i' => V('ㅑ'),
            'o' => V('ㅐ'),
            'p' => V('ㅔ'),
            'h' => V('ㅗ'),
            'j' => V('ㅓ'),
            'k' => V('ㅏ'),
            'l' => V('ㅣ'),
            'b' => V('ㅠ'),
            'n' => V('ㅜ'),
            'm' => V('ㅡ'),
            _ => return None,
        },
    };
    Some(jamo)
}

fn combine_vowels(first: char, second: char) -> Option<char> {
    match (first, second) {
        ('ㅗ', 'ㅏ') => Some('ㅘ'),
        ('ㅗ', 'ㅐ') => Some('ㅙ'),
        ('ㅗ', 'ㅣ') => Some('ㅚ'),
        ('ㅜ', 'ㅓ') => Some('ㅝ'),
        ('ㅜ', 'ㅔ') => Some('ㅞ'),
        ('ㅜ', 'ㅣ') => Some('ㅟ'),
        ('ㅡ', 'ㅣ') => Some('ㅢ'),
        _ => None,
    }
}

fn combine_finals(first: char, second: char) -> Option<char> {
    match (first, second) {
        ('ㄱ', 'ㅅ') => Some('ㄳ'),
        ('ㄴ', 'ㅈ') => Some('ㄵ'),
        ('ㄴ', 'ㅎ') => Some('ㄶ'),
        ('ㄹ', 'ㄱ') => Some('ㄺ'),
        ('ㄹ', 'ㅁ') => Some('ㄻ'),
        ('ㄹ', 'ㅂ') => Some('ㄼ'),
        ('ㄹ', 'ㅅ') => Some('ㄽ'),
        ('ㄹ', 'ㅌ') => Some('ㄾ'),
        ('ㄹ', 'ㅍ') => Some('ㄿ'),
        ('ㄹ', 'ㅎ') => Some('ㅀ'),
        ('ㅂ', 'ㅅ') => Some('ㅄ'),
        _ => None,
    }
}

fn split_final(jong: char) -> Option<(char, char)> {
    match jong {
        'ㄳ' => Some(('ㄱ', 'ㅅ')),
        'ㄵ' => Some(('ㄴ', 'ㅈ')),
        'ㄶ' => Some(('ㄴ', 'ㅎ')),
        'ㄺ' => Some(('ㄹ', 'ㄱ')),
        'ㄻ' => Some(('ㄹ', 'ㅁ')),
        'ㄼ' => Some(('ㄹ', 'ㅂ')),
        'ㄽ' => Some(('ㄹ', 'ㅅ')),
        'ㄾ' => Some(('ㄹ', 'ㅌ')),
        'ㄿ' => Some(('ㄹ', 'ㅍ')),
        'ㅀ' => Some(('ㄹ', 'ㅎ')),
        'ㅄ' => Some(('ㅂ', 'ㅅ')),
        _ => None,
    }
}

fn can_be_final(c: char) -> bool {
    JONGSEONG.contains(&c)
}

/// Syllable under construction
#[derive(Debug, Default)]
struct Syllable {
    cho: Option<char>,
    jung: Option<char>,
    jong: Option<char>,
}

impl Syllable {
    fn is_empty(&self) -> bool {
        self.cho.is_none() && self.jung.is_none() && self.jong.is_none()
    }

    fn flush_into(&mut self, out: &mut String) {
        let taken = std::mem::take(self);
        match (taken.cho, taken.jung) {
            (Some(cho), Some(jung)) => {
                let l = CHOSEONG.iter().position(|&c| c == cho);
                let v = JUNGSEONG.iter().position(|&c| c == jung);
                let t = match taken.jong {
                    Some(jong) => JONGSEONG.iter().position(|&c| c == jong).map(|i| i + 1),
                    None => Some(0),
                };
                match (l, v, t) {
                    (Some(l), Some(v), Some(t)) => {
                        let code = SYLLABLE_BASE + ((l as u32 * 21) + v as u32) * 28 + t as u32;
                        match char::from_u32(code) {
                            Some(syllable) => out.push(syllable),
                            None => out.extend([cho, jung]),
                        }
                    }
                    _ => {
                        out.push(cho);
                        out.push(jung);
                        out.extend(taken.jong);
                    }
                }
            }
            (cho, jung) => {
                out.extend(cho);
                out.extend(jung);
                out.extend(taken.jong);
            }
        }
    }
}

/// Transliterator for the standard Korean 2-set keyboard layout
#[derive(Debug, Default, Clone, Copy)]
pub struct DubeolsikTransliterator;

impl DubeolsikTransliterator {
    pub fn new() -> Self {
        Self
    }

    /// Replay `input` as Dubeolsik keystrokes and compose the result
    pub fn compose(input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut cur = Syllable::default();

        for key in input.chars() {
            match key_to_jamo(key) {
                Some(Jamo::Consonant(c)) => push_consonant(&mut cur, c, &mut out),
                Some(Jamo::Vowel(v)) => push_vowel(&mut cur, v, &mut out),
                None => {
                    cur.flush_into(&mut out);
                    out.push(key);
                }
            }
        }
        cur.flush_into(&mut out);
        out
    }
}

fn push_consonant(cur: &mut Syllable, c: char, out: &mut String) {
    match (cur.cho, cur.jung, cur.jong) {
        (Some(_), Some(_), None) if can_be_final(c) => cur.jong = Some(c),
        (Some(_), Some(_), Some(jong)) => match combine_finals(jong, c) {
            Some(combined) => cur.jong = Some(combined),
            None => {
                cur.flush_into(out);
                cur.cho = Some(c);
            }
        },
        _ => {
            if !cur.is_empty() {
                cur.flush_into(out);
            }
            cur.cho = Some(c);
        }
    }
}

fn push_vowel(cur: &mut Syllable, v: char, out: &mut String) {
    match (cur.cho, cur.jung, cur.jong) {
        (None, None, None) => cur.jung = Some(v),
        (Some(_), None, _) => cur.jung = Some(v),
        (_, Some(jung), None) => match combine_vowels(jung, v) {
            Some(combined) => cur.jung = Some(combined),
            None => {
                cur.flush_into(out);
                cur.jung = Some(v);
            }
        },
        (_, Some(_), Some(jong)) => {
            // The final consonant moves to the start of the next syllable.
            let next_cho = match split_final(jong) {
                Some((kept, moved)) => {
                    cur.jong = Some(kept);
                    moved
                }
                None => {
                    cur.jong = None;
                    jong
                }
            };
            cur.flush_into(out);
            cur.cho = Some(next_cho);
            cur.jung = Some(v);
        }
        (None, None, Some(_)) => {
            cur.flush_into(out);
            cur.jung = Some(v);
        }
    }
}

impl Transliterator for DubeolsikTransliterator {
    fn transliterate(&self, input: &str) -> Option<String> {
        if input.is_empty() {
            return None;
        }
        Some(Self::compose(input))
    }
}
