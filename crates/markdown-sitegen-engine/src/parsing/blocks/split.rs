use super::kinds::CodeFence;

/// Splits a document into trimmed, non-empty blocks in document order.
///
/// One or more blank (or whitespace-only) lines separate blocks. A block
/// that opens with a code fence is a raw zone: blank lines inside it do not
/// split it until the closing fence.
pub fn split_blocks(doc: &str) -> Vec<&str> {
    let mut blocks = vec![];
    let mut start: Option<usize> = None;
    let mut in_fence = false;
    let mut offset = 0usize;

    for line in doc.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        let content = line.trim_end_matches(['\r', '\n']);

        if in_fence {
            if CodeFence::is_fence(content) {
                in_fence = false;
            }
            continue;
        }

        if content.trim().is_empty() {
            if let Some(s) = start.take() {
                push_trimmed(&mut blocks, &doc[s..line_start]);
            }
            continue;
        }

        if start.is_none() {
            start = Some(line_start);
            in_fence = CodeFence::is_fence(content);
        }
    }

    if let Some(s) = start {
        push_trimmed(&mut blocks, &doc[s..]);
    }
    blocks
}

fn push_trimmed<'a>(blocks: &mut Vec<&'a str>, chunk: &'a str) {
    let trimmed = chunk.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed);
    }
}
