use anyhow::{anyhow, Context, Result};
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashSet;
use std::path::Path;

use super::PdfDocument;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Accumulates pages from several documents into one output document.
pub struct PdfWriter {
    doc: Document,
    pages_id: ObjectId,
    kids: Vec<ObjectId>,
}

impl PdfWriter {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        PdfWriter {
            doc,
            pages_id,
            kids: Vec::new(),
        }
    }

    pub fn page_count(&self) -> u32 {
        self.kids.len() as u32
    }

    /// Move the pages at the given zero-based indices from `source` into the
    /// output, in the order given.
    pub fn append_pages(&mut self, mut source: PdfDocument, indices: &[u32]) -> Result<()> {
        source.doc.renumber_objects_with(self.doc.max_id + 1);
        let pages = source.page_ids();
        let PdfDocument { mut doc, path } = source;

        let mut selected = Vec::with_capacity(indices.len());
        for &index in indices {
            let (_, page_id) = *pages.get(index as usize).ok_or_else(|| {
                anyhow!(
                    "Page {} is out of range (1-{}) in {}",
                    index + 1,
                    pages.len(),
                    path
                )
            })?;

            flatten_inherited(&mut doc, page_id)
                .with_context(|| format!("Failed to read page {} of {}", index + 1, path))?;
            doc.get_dictionary_mut(page_id)
                .with_context(|| format!("Failed to read page {} of {}", index + 1, path))?
                .set("Parent", Object::Reference(self.pages_id));
            selected.push(page_id);
        }

        if let Some(&(last_id, _)) = doc.objects.keys().next_back() {
            self.doc.max_id = self.doc.max_id.max(last_id);
        }
        self.doc.objects.extend(doc.objects);
        self.kids.extend(selected);

        Ok(())
    }

    /// Build the page tree and catalog, then write the document.
    ///
    /// Objects only reachable from the source catalogs (unselected pages,
    /// outlines, old page tree nodes) are pruned, and the remaining objects
    /// renumbered densely from 1, before writing.
    pub fn save<P: AsRef<Path>>(mut self, path: P) -> Result<()> {
        let kids: Vec<Object> = self.kids.iter().map(|id| Object::Reference(*id)).collect();
        let pages = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(kids.len() as i64)),
            ("Kids", Object::Array(kids)),
        ]);
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages));

        let catalog = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_id)),
        ]);
        let catalog_id = self.doc.add_object(catalog);
        self.doc.trailer.set("Root", Object::Reference(catalog_id));

        self.doc.prune_objects();
        self.doc.renumber_objects();

        self.doc
            .save(&path)
            .with_context(|| format!("Failed to save PDF: {}", path.as_ref().display()))?;
        Ok(())
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy inheritable attributes the page lacks from its nearest ancestor
/// that defines them, so the page survives being moved to a new tree.
fn flatten_inherited(doc: &mut Document, page_id: ObjectId) -> Result<()> {
    let page = doc.get_dictionary(page_id)?;
    let mut missing: Vec<&[u8]> = INHERITABLE
        .iter()
        .copied()
        .filter(|key| !page.has(key))
        .collect();
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();

    let mut inherited = Vec::new();
    let mut visited = HashSet::new();
    while let Some(node_id) = parent {
        if missing.is_empty() || !visited.insert(node_id) {
            break;
        }
        let node = doc.get_dictionary(node_id)?;
        missing.retain(|key| match node.get(key) {
            Ok(value) => {
                inherited.push((key.to_vec(), value.clone()));
                false
            }
            Err(_) => true,
        });
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    let page = doc.get_dictionary_mut(page_id)?;
    for (key, value) in inherited {
        page.set(key, value);
    }
    Ok(())
}
