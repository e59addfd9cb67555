//! Topic classification — ordered keyword rules over normalized text.
//!
//! Classification is a literal substring heuristic, not semantic matching:
//! the first rule in the table with any keyword contained in the normalized
//! question text wins. Rule order therefore decides ties and must not be
//! reshuffled.

use crate::quiz_engine::models::ModuleRule;
use crate::quiz_engine::normalize::normalize;

/// Category assigned when no rule matches.
pub const FALLBACK_CATEGORY: &str = "Banco Nivel II";

/// The fixed topic-module table, in evaluation order.
///
/// Keywords are stored pre-normalized (lowercase, no diacritics) since they
/// are matched against normalized question text. `"revólver"` is kept as-is
/// from the source material even though its accent means it can never match
/// a normalized text; the unaccented `"revolver"` next to it covers the case.
pub const MODULE_RULES: &[ModuleRule] = &[
    ModuleRule {
        name: "Módulo I: Equipos de Protección",
        keywords: &[
            "epp", "equipo de proteccion", "uniforme", "credencial", "cinto",
            "chaleco", "casco", "blindaje", "vidrio blindado", "vehiculo blindado",
            "compartimento", "compartimiento", "blindado",
        ],
    },
    ModuleRule {
        name: "Módulo II: Operaciones de Seguridad",
        keywords: &["vigilancia", "contravigilancia", "rutas", "analisis de rutas"],
    },
    ModuleRule {
        name: "Módulo III: Seguridad Ciudadana",
        keywords: &[
            "seguridad ciudadana", "seguridad humana", "derechos humanos",
            "violencia", "policia comunitaria", "ecu 911", "sise", "sissecu",
        ],
    },
    ModuleRule {
        name: "Módulo IV: Normativa Vigente",
        keywords: &[
            "ley", "coip", "art", "articulo", "licencia", "transito",
            "contravencion", "delito", "flagrancia", "tenencia", "porte",
        ],
    },
    ModuleRule {
        name: "Módulo V: Protección VIP y Custodia",
        keywords: &[
            "vip", "escolta", "custodia", "convoy", "carga critica",
            "transporte de valores", "portavalor", "caravana",
        ],
    },
    ModuleRule {
        name: "Módulo VI: Comunicaciones e Información",
        keywords: &[
            "radio", "comunicacion", "gps", "gprs", "gsm", "umts",
            "indicativos", "contrasenas", "codigos", "confidencialidad",
            "integridad", "disponibilidad", "informacion",
        ],
    },
    ModuleRule {
        name: "Módulo VII: Manejo de Crisis",
        keywords: &["crisis", "emergencia", "comite de crisis", "accion adaptativa"],
    },
    ModuleRule {
        name: "Módulo VIII: Práctica de Tiro",
        keywords: &[
            "arma de fuego", "arma", "revólver", "revolver", "pistola",
            "escopeta", "tiro", "punteria", "disparo", "cañon", "canon",
            "recamara", "gatillo",
        ],
    },
];

/// Assign a category to `question_text` by first-match over `rules`.
///
/// Deterministic: same text and table always yield the same name. Returns
/// [`FALLBACK_CATEGORY`] when nothing matches.
pub fn categorize(question_text: &str, rules: &[ModuleRule]) -> String {
    let normalized = normalize(question_text);
    for rule in rules {
        if rule.keywords.iter().any(|kw| normalized.contains(kw)) {
            return rule.name.to_string();
        }
    }
    FALLBACK_CATEGORY.to_string()
}
