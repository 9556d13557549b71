// Módulo raíz para algoritmos. Reexporta funciones desde submódulos.

pub mod estado;
pub mod progreso;
pub mod resumen;
pub mod validacion;

pub use estado::{
    classify_course, classify_malla, classify_semester, codigos_desbloqueados, predicados,
    AsignaturaClasificada, Predicados, SemestreClasificado,
};
pub use progreso::{Accion, Progreso};
pub use resumen::{resumir, ResumenMalla};
pub use validacion::{validar_malla, InformeMalla};
