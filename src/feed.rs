//! Splitting note text into plain text and inline invoices.

const SCHEME: &str = "lightning:";

/// Human-readable prefixes of mainnet, testnet, signet and regtest invoices.
const INVOICE_PREFIXES: [&str; 3] = ["lnbc", "lntb", "lnsb"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Invoice(String),
}

/// Split `content` into text and invoice segments, in order.
///
/// Text segments keep their whitespace. A `lightning:` scheme in front of an
/// invoice is dropped, trailing punctuation stays in the following text.
pub fn segments(content: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut text_start = 0;

    for (start, word) in words(content) {
        let Some((offset, invoice)) = invoice_in(word) else {
            continue;
        };

        if start > text_start {
            out.push(Segment::Text(content[text_start..start].to_string()));
        }
        out.push(Segment::Invoice(invoice.to_string()));
        text_start = start + offset + invoice.len();
    }

    if text_start < content.len() {
        out.push(Segment::Text(content[text_start..].to_string()));
    }

    out
}

/// Whitespace-delimited words with their byte offsets.
fn words(content: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start = None;

    for (i, ch) in content.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                words.push((s, &content[s..i]));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push((s, &content[s..]));
    }

    words
}

/// Locate an invoice inside a single word. Returns the length of the scheme
/// in front of it and the invoice itself, without trailing punctuation.
fn invoice_in(word: &str) -> Option<(usize, &str)> {
    let offset = match word.get(..SCHEME.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(SCHEME) => SCHEME.len(),
        _ => 0,
    };
    let candidate = word[offset..].trim_end_matches(|c: char| !c.is_ascii_alphanumeric());

    let prefixed = candidate.get(..4).is_some_and(|hrp| {
        INVOICE_PREFIXES
            .iter()
            .any(|prefix| hrp.eq_ignore_ascii_case(prefix))
    });

    let bech32 = candidate.contains('1') && candidate.chars().all(|c| c.is_ascii_alphanumeric());

    (prefixed && bech32).then_some((offset, candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVOICE: &str = "lnbc10u1pjexample0qqsp5zyg3zyg3zyg3zyg3zyg";

    fn text(s: &str) -> Segment {
        Segment::Text(s.to_string())
    }

    fn invoice(s: &str) -> Segment {
        Segment::Invoice(s.to_string())
    }

    #[test]
    fn plain_text_is_one_segment() {
        assert_eq!(segments("gm nostr"), vec![text("gm nostr")]);
        assert!(segments("").is_empty());
    }

    #[test]
    fn invoice_between_text() {
        let content = format!("pay me {INVOICE} thanks");
        assert_eq!(
            segments(&content),
            vec![text("pay me "), invoice(INVOICE), text(" thanks")]
        );
    }

    #[test]
    fn invoice_alone() {
        assert_eq!(segments(INVOICE), vec![invoice(INVOICE)]);
    }

    #[test]
    fn scheme_is_dropped_and_punctuation_kept() {
        let content = format!("here: lightning:{INVOICE}!");
        assert_eq!(
            segments(&content),
            vec![text("here: "), invoice(INVOICE), text("!")]
        );
    }

    #[test]
    fn uppercase_and_testnet_invoices_are_found() {
        let upper = INVOICE.to_uppercase();
        let testnet = INVOICE.replacen("lnbc", "lntbs", 1);
        let content = format!("{upper}\n{testnet}");

        assert_eq!(
            segments(&content),
            vec![invoice(&upper), text("\n"), invoice(&testnet)]
        );
    }

    #[test]
    fn lookalike_words_stay_text() {
        let content = "lnbcx is not an invoice, nor is lnurl1dp68gurn";
        assert_eq!(segments(content), vec![text(content)]);
    }

    #[test]
    fn whitespace_is_preserved() {
        let content = format!("  a\t{INVOICE}  ");
        assert_eq!(
            segments(&content),
            vec![text("  a\t"), invoice(INVOICE), text("  ")]
        );
    }
}
