//! Adaptadores de entrada del lado del llamador.
//!
//! Click derecho (escritorio) y presión larga (pantallas táctiles) terminan en
//! la misma acción `ToggleEnCurso`; el motor no sabe de dispositivos. El toque
//! simple se resuelve a `Click`, que depende del estado de la asignatura.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::trace;

use crate::algorithm::Accion;

/// Duración por defecto de la presión larga.
pub const DURACION_PRESION_LARGA: Duration = Duration::from_millis(1200);

/// Milisegundos de una duración, saturando en `u64::MAX`.
pub fn millis(duracion: Duration) -> u64 {
    u64::try_from(duracion.as_millis()).unwrap_or(u64::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesto {
    Click,
    ClickDerecho,
    PresionLarga,
}

pub fn resolver_gesto(gesto: Gesto, codigo: &str) -> Accion {
    let codigo = codigo.to_string();
    match gesto {
        Gesto::Click => Accion::Click { codigo },
        Gesto::ClickDerecho | Gesto::PresionLarga => Accion::ToggleEnCurso { codigo },
    }
}

/// Callback programado y cancelable (touchstart inicia, touchend cancela).
///
/// Debe usarse dentro de un runtime tokio.
#[derive(Debug, Default)]
pub struct TemporizadorPresion {
    pendiente: Option<JoinHandle<()>>,
}

impl TemporizadorPresion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Programa `callback` tras `duracion`. Si ya había uno pendiente, se cancela.
    pub fn iniciar<F>(&mut self, duracion: Duration, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancelar();
        trace!(ms = millis(duracion), "presión iniciada");
        self.pendiente = Some(tokio::spawn(async move {
            tokio::time::sleep(duracion).await;
            callback();
        }));
    }

    /// Cancela el callback pendiente. Devuelve true si había uno sin disparar.
    pub fn cancelar(&mut self) -> bool {
        match self.pendiente.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                trace!("presión cancelada");
                true
            }
            _ => false,
        }
    }

    pub fn activo(&self) -> bool {
        self.pendiente.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for TemporizadorPresion {
    fn drop(&mut self) {
        if let Some(handle) = self.pendiente.take() {
            handle.abort();
        }
    }
}
