//! # Índice Morfema → Dono
//!
//! Para cada tipo de dono (palavras, NEs da anotação, NEs do dicionário) a
//! sentença mantém um mapa da identidade do morfema para a **posição** do dono
//! na lista correspondente.
//!
//! ## Construção
//!
//! Os donos são percorridos na ordem dada e cada morfema **existente** no
//! intervalo inclusivo `[begin, end]` aponta para o dono atual. Identidades
//! do intervalo sem morfema correspondente não entram no índice, então o
//! tamanho é limitado pelo número de morfemas da sentença. Intervalos
//! sobrepostos não são erro: o último dono na ordem de iteração vence.

use std::collections::HashMap;

use tracing::trace;

use crate::entity::{SpanEntity, OUTSIDE};
use crate::error::Result;
use crate::morph::MorphRange;

/// Mapa imutável de identidade de morfema para posição do dono.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MorphIndex {
    owners: HashMap<usize, usize>,
}

impl MorphIndex {
    /// Constrói o índice a partir dos donos, em ordem.
    ///
    /// `morp_ids` são as identidades dos morfemas da sentença, em qualquer ordem.
    pub fn build<T: MorphRange>(morp_ids: &[usize], owners: &[T]) -> Self {
        let mut ids = morp_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        let mut index = HashMap::new();
        for (pos, owner) in owners.iter().enumerate() {
            let lo = ids.partition_point(|&id| id < owner.begin());
            let hi = ids.partition_point(|&id| id <= owner.end());
            for &morp_id in &ids[lo..hi.max(lo)] {
                if let Some(prev) = index.insert(morp_id, pos) {
                    trace!(morp_id, prev, pos, "morfema com dois donos; o último vence");
                }
            }
        }
        Self { owners: index }
    }

    /// Posição do dono do morfema, se houver.
    pub fn get(&self, morp_id: usize) -> Option<usize> {
        self.owners.get(&morp_id).copied()
    }

    pub fn contains(&self, morp_id: usize) -> bool {
        self.owners.contains_key(&morp_id)
    }

    /// Número de morfemas indexados
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Dono do morfema dentro de `owners` (a mesma lista usada no `build`).
    pub fn owner<'a, T>(&self, owners: &'a [T], morp_id: usize) -> Option<&'a T> {
        self.get(morp_id).and_then(|pos| owners.get(pos))
    }
}

/// Resolve o rótulo IOB de um morfema a partir de um par índice/entidades.
///
/// Compartilhado pelas consultas de anotação e de dicionário, que diferem
/// apenas no par passado. Morfema fora do índice → `"O"`.
pub fn label_of(index: &MorphIndex, entities: &[SpanEntity], morp_id: usize) -> Result<String> {
    match index.owner(entities, morp_id) {
        Some(entity) => entity.label(morp_id),
        None => Ok(OUTSIDE.to_string()),
    }
}
