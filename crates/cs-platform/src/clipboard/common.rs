use anyhow::{anyhow, Result};
use clipboard_rs::{Clipboard, ClipboardContent, ClipboardContext};
use cs_core::clipboard::{Representation, RepresentationSet};
use tracing::{debug, warn};

pub struct CommonClipboardImpl;

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

impl CommonClipboardImpl {
    /// Reads every advertised format as raw bytes, in the order the
    /// platform lists them. Formats that fail to read are skipped.
    pub fn read_items(ctx: &ClipboardContext) -> Result<Vec<RepresentationSet>> {
        let available = map_clipboard_err(ctx.available_formats())?;

        let mut reps: Vec<Representation> = Vec::with_capacity(available.len());
        for format_id in available {
            if reps.iter().any(|r| r.type_id == format_id) {
                continue;
            }
            match ctx.get_buffer(&format_id) {
                Ok(bytes) => reps.push(Representation::new(format_id, bytes)),
                Err(err) => debug!(format_id = %format_id, error = %err, "skipping unreadable clipboard format"),
            }
        }

        if reps.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![RepresentationSet::new(reps)?])
    }

    /// Writes the first item's representations as raw buffers. The system
    /// clipboard holds a single item here, so extra items are dropped.
    pub fn write_items(ctx: &ClipboardContext, items: &[RepresentationSet]) -> Result<()> {
        let Some(first) = items.first() else {
            return map_clipboard_err(ctx.clear());
        };
        if items.len() > 1 {
            warn!(
                items = items.len(),
                "system clipboard holds one item; writing the first only"
            );
        }

        let contents: Vec<ClipboardContent> = first
            .iter()
            .map(|rep| ClipboardContent::Other(rep.type_id.clone(), rep.bytes.clone()))
            .collect();

        map_clipboard_err(ctx.set(contents))
    }
}
