/// Lays out words for printing.
///
/// - `width == 0`: one word per line
/// - otherwise: words separated by one space, greedily packed into lines
///   of at most `width` characters; a word longer than `width` starts a new
///   line and is cut into `width`-sized pieces
pub fn lines<S: AsRef<str>>(words: &[S], width: usize) -> Vec<String> {
    if width == 0 {
        return words.iter().map(|word| word.as_ref().to_owned()).collect();
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in words {
        let word = word.as_ref();
        let word_len = word.chars().count();

        if line_len > 0 && line_len + 1 + word_len <= width {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
            continue;
        }

        if line_len > 0 {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }

        if word_len <= width {
            line.push_str(word);
            line_len = word_len;
            continue;
        }

        let chars: Vec<char> = word.chars().collect();
        let mut pieces = chars.chunks(width).peekable();
        while let Some(piece) = pieces.next() {
            if pieces.peek().is_some() {
                lines.push(piece.iter().collect());
            } else {
                line = piece.iter().collect();
                line_len = piece.len();
            }
        }
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}
