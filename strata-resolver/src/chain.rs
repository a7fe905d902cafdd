//! Template inheritance chain walking.

use std::collections::{HashSet, VecDeque};

use strata_model::{Template, TemplateStore};
use strata_types::{DatabaseId, TemplateId};
use tracing::debug;

use crate::error::ResolveResult;

/// Produces the ordered sequence of templates to consult for defaults:
/// the template itself, then its ancestors breadth-first over each
/// template's declared base order.
///
/// Templates are fetched from the store by ID as the walk reaches them.
/// A base listed by several templates can appear in the chain more than
/// once — first-write-wins merging makes the repeat visits no-ops — but a
/// template is never *expanded* twice, so cyclic metadata cannot hang the
/// walk.
pub struct TemplateChainWalker<'a> {
    templates: &'a dyn TemplateStore,
}

impl<'a> TemplateChainWalker<'a> {
    /// Creates a walker over the given template store.
    pub fn new(templates: &'a dyn TemplateStore) -> Self {
        Self { templates }
    }

    /// Resolves the inheritance chain rooted at `template_id`.
    ///
    /// An unresolvable root yields an empty chain; unresolvable ancestors
    /// are skipped. Neither is an error.
    pub fn chain(
        &self,
        template_id: TemplateId,
        database: &DatabaseId,
    ) -> ResolveResult<Vec<Template>> {
        let Some(root) = self.templates.template(template_id, database)? else {
            debug!("template {template_id} not found in {database}, empty chain");
            return Ok(Vec::new());
        };

        let mut expanded = HashSet::from([root.id]);
        let mut queue: VecDeque<TemplateId> = root.base_ids.iter().copied().collect();
        let mut chain = vec![root];

        while let Some(id) = queue.pop_front() {
            let Some(template) = self.templates.template(id, database)? else {
                continue;
            };
            if expanded.insert(template.id) {
                queue.extend(template.base_ids.iter().copied());
            }
            chain.push(template);
        }

        debug!(
            "template chain for {template_id} in {database}: {} entries",
            chain.len()
        );
        Ok(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_model::MemoryTemplateStore;

    fn db() -> DatabaseId {
        "master".into()
    }

    #[test]
    fn unknown_root_yields_empty_chain() {
        let store = MemoryTemplateStore::new();
        let walker = TemplateChainWalker::new(&store);
        let chain = walker.chain(TemplateId::new(), &db()).unwrap();
        assert!(chain.is_empty());
    }

    #[test]
    fn chain_orders_self_then_bases_breadth_first() {
        let store = MemoryTemplateStore::new();
        let (t, b1, b2, c) = (
            TemplateId::new(),
            TemplateId::new(),
            TemplateId::new(),
            TemplateId::new(),
        );
        store.insert(db(), Template::new(t).with_bases(vec![b1, b2]));
        store.insert(db(), Template::new(b1).with_bases(vec![c]));
        store.insert(db(), Template::new(b2));
        store.insert(db(), Template::new(c));

        let walker = TemplateChainWalker::new(&store);
        let chain = walker.chain(t, &db()).unwrap();
        let ids: Vec<TemplateId> = chain.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![t, b1, b2, c]);
    }

    #[test]
    fn missing_ancestor_is_skipped() {
        let store = MemoryTemplateStore::new();
        let (t, gone, b) = (TemplateId::new(), TemplateId::new(), TemplateId::new());
        store.insert(db(), Template::new(t).with_bases(vec![gone, b]));
        store.insert(db(), Template::new(b));

        let walker = TemplateChainWalker::new(&store);
        let chain = walker.chain(t, &db()).unwrap();
        let ids: Vec<TemplateId> = chain.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![t, b]);
    }

    #[test]
    fn cyclic_metadata_terminates() {
        let store = MemoryTemplateStore::new();
        let (a, b) = (TemplateId::new(), TemplateId::new());
        store.insert(db(), Template::new(a).with_bases(vec![b]));
        store.insert(db(), Template::new(b).with_bases(vec![a]));

        let walker = TemplateChainWalker::new(&store);
        let chain = walker.chain(a, &db()).unwrap();
        let ids: Vec<TemplateId> = chain.iter().map(|t| t.id).collect();
        // a expands to b; b lists a again, which is re-visited but not
        // re-expanded.
        assert_eq!(ids, vec![a, b, a]);
    }
}
