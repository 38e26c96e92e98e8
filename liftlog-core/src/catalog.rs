//! The default training plan written into a fresh database.
//!
//! Seeding happens once per database. After that the catalog belongs to the
//! user: exercises and whole days can be added or removed and the default
//! plan is never written again.

/// One exercise of the default plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub sets: i32,
    pub reps: &'static str,
    pub day: &'static str,
}

const fn entry(
    day: &'static str,
    name: &'static str,
    sets: i32,
    reps: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        name,
        sets,
        reps,
        day,
    }
}

pub const DEFAULT_CATALOG: &[CatalogEntry] = &[
    entry("segunda", "Puxador frontal", 4, "8-12"),
    entry("segunda", "Remada cavalinho", 3, "8-10"),
    entry("segunda", "Remada baixa no cabo", 3, "8-12"),
    entry("segunda", "Pullover", 3, "8-15"),
    entry("segunda", "Rosca na maquina", 3, "8-10"),
    entry("segunda", "Rosca martelo", 3, "10-12"),
    entry("quarta", "Crucifixo no crossover", 3, "8-12"),
    entry("quarta", "Crucifixo banco 30 graus", 3, "8-12"),
    entry("quarta", "Supino inclinado com barra", 3, "8-12"),
    entry("quarta", "Supino declinado", 3, "8-12"),
    entry("quarta", "Tríceps testa na corda", 3, "8-12"),
    entry("quarta", "Tríceps barra", 3, "8-15"),
    entry("sexta", "Agachamento sumô", 4, "8-12"),
    entry("sexta", "Leg press", 3, "8-12"),
    entry("sexta", "Cadeira extensora", 3, "8-12"),
    entry("sexta", "Cadeira flexora unilateral", 4, "8-15"),
    entry("sexta", "Mesa flexora", 4, "8-15"),
    entry("sexta", "Elevação pélvica", 4, "8-15"),
    entry("sexta", "Panturrilha em pé", 4, "8-12"),
    entry("sabado", "Desenvolvimento na máquina", 3, "8-10"),
    entry("sabado", "Elevação lateral com halteres", 3, "8-15"),
    entry("sabado", "Remada lateral no cabo", 4, "8-15"),
    entry("sabado", "Crucifixo inverso", 3, "8-15"),
    entry("sabado", "Posterior no cabo unilateral", 3, "8-15"),
    entry("sabado", "Elevação frontal", 3, "8-12"),
];
