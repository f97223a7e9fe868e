// ============================================================
// Layer 4 — RTF Converter
// ============================================================
// A single-pass tokenizer over RTF source. Each match of
// TOKEN_RE is one of:
//
//   \word-12␠   control word with optional numeric argument
//   \'e9        hex-escaped byte (Windows-1252)
//   \~ \{ \*    control symbol
//   { }         group open / close
//   \r \n       source line breaks (not text)
//   x           any other character, emitted as text
//
// Group state (ignorable destination, \uc skip count) is saved
// on '{' and restored on '}'. Destinations such as \fonttbl,
// \colortbl, \info or any {\* ...} group produce no text.
//
//   {\rtf1\ansi First.\par na\u239?ve}  →  "First.\nnaïve"

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\\([a-z]{1,32})(-?\d{1,10})?[ ]?|\\'([0-9a-f]{2})|\\([^a-z])|([{}])|[\r\n]+|(.)")
        .unwrap()
});

/// Groups whose content is never part of the document text
const DESTINATIONS: &[&str] = &[
    "aftncn", "aftnsep", "aftnsepc", "annotation", "atnauthor", "atndate",
    "atnicn", "atnid", "atnparent", "atnref", "atntime", "atrfend",
    "atrfstart", "author", "background", "bkmkend", "bkmkstart", "blipuid",
    "buptim", "category", "colorschememapping", "colortbl", "comment",
    "company", "creatim", "datafield", "datastore", "defchp", "defpap", "do",
    "doccomm", "docvar", "dptxbxtext", "ebcend", "ebcstart", "factoidname",
    "falt", "fchars", "ffdeftext", "ffentrymcr", "ffexitmcr", "ffformat",
    "ffhelptext", "ffl", "ffname", "ffstattext", "file", "filetbl", "fldinst",
    "fldtype", "fname", "fontemb", "fontfile", "fonttbl", "footer", "footerf",
    "footerl", "footerr", "footnote", "formfield", "ftncn", "ftnsep",
    "ftnsepc", "g", "generator", "gridtbl", "header", "headerf", "headerl",
    "headerr", "hl", "hlfr", "hlinkbase", "hlloc", "hlsrc", "hsv", "htmltag",
    "info", "keycode", "keywords", "latentstyles", "lchars", "levelnumbers",
    "leveltext", "lfolevel", "linkval", "list", "listlevel", "listname",
    "listoverride", "listoverridetable", "listpicture", "liststylename",
    "listtable", "listtext", "lsdlockedexcept", "macc", "mailmerge", "manager",
    "mmath", "mmathPr", "nesttableprops", "nextfile", "nonesttables",
    "objalias", "objclass", "objdata", "object", "objname", "objsect",
    "objtime", "oldcprops", "oldpprops", "oldsprops", "oldtprops", "oleclsid",
    "operator", "panose", "password", "passwordhash", "pgp", "pgptbl",
    "picprop", "pict", "pn", "pnseclvl", "pntext", "pntxta", "pntxtb",
    "printim", "private", "propname", "protend", "protstart", "protusertbl",
    "pxe", "result", "revtbl", "revtim", "rsidtbl", "rxe", "shp", "shpgrp",
    "shpinst", "shppict", "shprslt", "shptxt", "sn", "sp", "staticval",
    "stylesheet", "subject", "sv", "svb", "tc", "template", "themedata",
    "title", "txe", "ud", "upr", "userprops", "wgrffmtfilter",
    "windowcaption", "writereservation", "writereservhash", "xe", "xform",
    "xmlattrname", "xmlattrvalue", "xmlclose", "xmlname", "xmlnstbl",
    "xmlopen",
];

/// Control words that stand for literal text
fn special_char(word: &str) -> Option<&'static str> {
    Some(match word {
        "par" | "line" | "row"  => "\n",
        "sect" | "page"         => "\n\n",
        "tab"                   => "\t",
        "cell" | "nestcell"     => "|",
        "emdash"                => "\u{2014}",
        "endash"                => "\u{2013}",
        "emspace" | "enspace" | "qmspace" => " ",
        "bullet"                => "\u{2022}",
        "lquote"                => "\u{2018}",
        "rquote"                => "\u{2019}",
        "ldblquote"             => "\u{201C}",
        "rdblquote"             => "\u{201D}",
        _ => return None,
    })
}

/// Windows-1252 bytes 0x80..=0x9F; the rest of the range maps
/// straight to Latin-1.
const CP1252_HIGH: [char; 32] = [
    '€', '\u{FFFD}', '‚', 'ƒ', '„', '…', '†', '‡', 'ˆ', '‰', 'Š', '‹', 'Œ', '\u{FFFD}', 'Ž', '\u{FFFD}',
    '\u{FFFD}', '‘', '’', '“', '”', '•', '–', '—', '˜', '™', 'š', '›', 'œ', '\u{FFFD}', 'ž', 'Ÿ',
];

fn cp1252(byte: u8) -> char {
    match byte {
        0x80..=0x9F => CP1252_HIGH[usize::from(byte - 0x80)],
        _ => char::from(byte),
    }
}

#[derive(Clone, Copy)]
struct GroupState {
    ignorable: bool,
    uc_skip:   u32,
}

/// Plain text of an RTF document, or `None` when the input does
/// not carry the `{\rtf` header.
pub fn convert(content: &str) -> Option<String> {
    if !content.trim_start().starts_with("{\\rtf") {
        return None;
    }

    let mut out = String::with_capacity(content.len() / 2);
    let mut stack: Vec<GroupState> = Vec::new();
    let mut state = GroupState { ignorable: false, uc_skip: 1 };
    // Fallback characters still to skip after a \u escape
    let mut pending_skip = 0u32;
    // High half of a UTF-16 surrogate pair written as two \u escapes
    let mut high_surrogate: Option<u32> = None;

    for caps in TOKEN_RE.captures_iter(content) {
        if let Some(brace) = caps.get(5) {
            pending_skip = 0;
            if brace.as_str() == "{" {
                stack.push(state);
            } else if let Some(outer) = stack.pop() {
                state = outer;
            }
        } else if let Some(symbol) = caps.get(4) {
            pending_skip = 0;
            match symbol.as_str() {
                "*" => state.ignorable = true,
                _ if state.ignorable => {}
                "~" => out.push('\u{A0}'),
                s @ ("{" | "}" | "\\") => out.push_str(s),
                _ => {}
            }
        } else if let Some(word) = caps.get(1) {
            pending_skip = 0;
            let word = word.as_str();
            let arg  = caps.get(2).and_then(|a| a.as_str().parse::<i64>().ok());

            if DESTINATIONS.contains(&word) {
                state.ignorable = true;
            } else if state.ignorable {
                // inside a destination
            } else if let Some(text) = special_char(word) {
                out.push_str(text);
            } else if word == "uc" {
                state.uc_skip = arg.and_then(|n| u32::try_from(n).ok()).unwrap_or(1);
            } else if word == "u" {
                if let Some(code) = arg {
                    push_utf16_unit(&mut out, &mut high_surrogate, code);
                    pending_skip = state.uc_skip;
                }
            }
        } else if let Some(hex) = caps.get(3) {
            if pending_skip > 0 {
                pending_skip -= 1;
            } else if !state.ignorable {
                if let Ok(byte) = u8::from_str_radix(hex.as_str(), 16) {
                    out.push(cp1252(byte));
                }
            }
        } else if let Some(ch) = caps.get(6) {
            if pending_skip > 0 {
                pending_skip -= 1;
            } else if !state.ignorable {
                out.push_str(ch.as_str());
            }
        }
    }

    Some(out)
}

/// `\uN` carries a signed 16-bit UTF-16 code unit
fn push_utf16_unit(out: &mut String, high_surrogate: &mut Option<u32>, code: i64) {
    let unit = if code < 0 { code + 0x1_0000 } else { code };
    let Ok(unit) = u32::try_from(unit) else {
        return;
    };

    match unit {
        0xD800..=0xDBFF => *high_surrogate = Some(unit),
        0xDC00..=0xDFFF => {
            if let Some(high) = high_surrogate.take() {
                let scalar = 0x1_0000 + ((high - 0xD800) << 10) + (unit - 0xDC00);
                out.extend(char::from_u32(scalar));
            }
        }
        _ => {
            *high_surrogate = None;
            out.extend(char::from_u32(unit));
        }
    }
}
