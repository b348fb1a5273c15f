//! REST client for the shift service.
//!
//! The service speaks Spanish field names (`colaborador`, `fecha`,
//! `horaEntrada`, ...) and returns shifts in the shape [`Shift`] decodes.
//! Dates travel as `YYYY-MM-DD` query parameters. Any non-2xx answer is
//! turned into [`TransportError::Status`] with the response body kept for
//! the user.

use super::{BackendResult, ShiftBackend};
use crate::libs::config::ApiConfig;
use crate::libs::error::TransportError;
use crate::libs::report::{MonthlySummary, OvertimeRow, ReportQuery};
use crate::libs::shift::{Employee, Holiday, Shift, ShiftPayload, Store};
use crate::libs::store::sort_stores;
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

// Endpoint paths, relative to the configured base URL
const SHIFTS_URL: &str = "api/turnos";
const MONTHLY_SHIFTS_URL: &str = "api/turnos/mensual";
const HOURS_REPORT_URL: &str = "api/turnos/reporte";
const HOLIDAY_REPORT_URL: &str = "api/turnos/reporte/feriados";
const OVERTIME_REPORT_URL: &str = "api/turnos/reporte/horas-extra";
const MONTHLY_SUMMARY_URL: &str = "api/turnos/resumen-mensual";
const HOLIDAYS_URL: &str = "api/feriados";
const STORES_URL: &str = "api/tiendas";
const EMPLOYEES_URL: &str = "api/colaboradores";

/// Reference to a related entity as the service expects it: `{"id": 3}`.
#[derive(Serialize)]
struct IdRef {
    id: i64,
}

/// Create/update body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShiftBody {
    colaborador: IdRef,
    fecha: String,
    hora_entrada: String,
    hora_salida: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    empresa: Option<IdRef>,
    tienda: IdRef,
}

impl From<&ShiftPayload> for ShiftBody {
    fn from(payload: &ShiftPayload) -> Self {
        Self {
            colaborador: IdRef { id: payload.employee_id },
            fecha: payload.date.format("%Y-%m-%d").to_string(),
            hora_entrada: payload.window.start.to_string(),
            hora_salida: payload.window.end.to_string(),
            empresa: payload.company_id.map(|id| IdRef { id }),
            tienda: IdRef { id: payload.store_id },
        }
    }
}

/// [`ShiftBackend`] over the REST service.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Creates a client for the service at `config.api_url`.
    ///
    /// # Arguments
    ///
    /// * `config` - API section of the configuration; a trailing `/` on the
    ///   base URL is ignored
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Sends the request and turns a non-2xx answer into
    /// [`TransportError::Status`].
    async fn send(&self, request: RequestBuilder) -> BackendResult<reqwest::Response> {
        let res = request.send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "shift service rejected request");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(res)
    }

    /// Sends the request and decodes the JSON body into `T`.
    ///
    /// A body that does not match `T` is a [`TransportError::Decode`].
    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> BackendResult<T> {
        let res = self.send(request).await?;
        let body = res.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET request for a report endpoint with the range and, when given,
    /// the comma-separated employee filter.
    fn report_request(&self, path: &str, query: &ReportQuery) -> RequestBuilder {
        let mut params = vec![
            ("fechaInicio", query.start.format("%Y-%m-%d").to_string()),
            ("fechaFin", query.end.format("%Y-%m-%d").to_string()),
        ];
        if !query.employee_ids.is_empty() {
            params.push(("colaboradores", query.employee_param()));
        }
        self.client.get(self.url(path)).query(&params)
    }
}

impl ShiftBackend for HttpBackend {
    async fn list_shifts(&self, week_start: NaiveDate) -> BackendResult<Vec<Shift>> {
        tracing::debug!(%week_start, "listing shifts");
        let request = self
            .client
            .get(self.url(SHIFTS_URL))
            .query(&[("fecha", week_start.format("%Y-%m-%d").to_string())]);
        self.fetch(request).await
    }

    async fn list_shifts_for_employee(&self, employee_id: i64) -> BackendResult<Vec<Shift>> {
        let request = self.client.get(self.url(&format!("{}/{}", SHIFTS_URL, employee_id)));
        self.fetch(request).await
    }

    async fn list_month_shifts(&self, year: i32, month: u32) -> BackendResult<Vec<Shift>> {
        let request = self
            .client
            .get(self.url(MONTHLY_SHIFTS_URL))
            .query(&[("mes", month.to_string()), ("anio", year.to_string())]);
        self.fetch(request).await
    }

    async fn create_shift(&self, payload: &ShiftPayload) -> BackendResult<Shift> {
        tracing::debug!(employee = payload.employee_id, date = %payload.date, window = %payload.window, "creating shift");
        let request = self.client.post(self.url(SHIFTS_URL)).json(&ShiftBody::from(payload));
        self.fetch(request).await
    }

    async fn update_shift(&self, id: i64, payload: &ShiftPayload) -> BackendResult<Shift> {
        tracing::debug!(id, window = %payload.window, "updating shift");
        let request = self
            .client
            .put(self.url(&format!("{}/{}", SHIFTS_URL, id)))
            .json(&ShiftBody::from(payload));
        self.fetch(request).await
    }

    async fn delete_shift(&self, id: i64) -> BackendResult<()> {
        tracing::debug!(id, "deleting shift");
        let request = self.client.delete(self.url(&format!("{}/{}", SHIFTS_URL, id)));
        self.send(request).await?;
        Ok(())
    }

    async fn list_holidays(&self) -> BackendResult<Vec<Holiday>> {
        self.fetch(self.client.get(self.url(HOLIDAYS_URL))).await
    }

    /// Sorted into store order before returning.
    async fn list_stores(&self) -> BackendResult<Vec<Store>> {
        let mut stores: Vec<Store> = self.fetch(self.client.get(self.url(STORES_URL))).await?;
        sort_stores(&mut stores);
        Ok(stores)
    }

    async fn list_employees(&self) -> BackendResult<Vec<Employee>> {
        self.fetch(self.client.get(self.url(EMPLOYEES_URL))).await
    }

    async fn hours_worked(&self, query: &ReportQuery) -> BackendResult<Vec<Shift>> {
        self.fetch(self.report_request(HOURS_REPORT_URL, query)).await
    }

    async fn holiday_shifts(&self, query: &ReportQuery) -> BackendResult<Vec<Shift>> {
        self.fetch(self.report_request(HOLIDAY_REPORT_URL, query)).await
    }

    async fn overtime(&self, query: &ReportQuery) -> BackendResult<Vec<OvertimeRow>> {
        self.fetch(self.report_request(OVERTIME_REPORT_URL, query)).await
    }

    async fn monthly_summary(&self, year: i32, month: u32, employee_ids: &[i64]) -> BackendResult<Vec<MonthlySummary>> {
        let mut params = vec![("mes", month.to_string()), ("anio", year.to_string())];
        if !employee_ids.is_empty() {
            let ids: Vec<String> = employee_ids.iter().map(|id| id.to_string()).collect();
            params.push(("colaboradores", ids.join(",")));
        }
        let request = self.client.get(self.url(MONTHLY_SUMMARY_URL)).query(&params);
        self.fetch(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::time_of_day::{ShiftWindow, TimeOfDay};

    #[test]
    fn body_uses_service_field_names() {
        let payload = ShiftPayload {
            employee_id: 7,
            company_id: Some(2),
            store_id: 3,
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            window: ShiftWindow::new(TimeOfDay::hm(8, 0), TimeOfDay::hm(16, 0)),
        };
        let json = serde_json::to_value(ShiftBody::from(&payload)).unwrap();
        assert_eq!(json["colaborador"]["id"], 7);
        assert_eq!(json["fecha"], "2025-03-10");
        assert_eq!(json["horaEntrada"], "08:00");
        assert_eq!(json["horaSalida"], "16:00");
        assert_eq!(json["empresa"]["id"], 2);
        assert_eq!(json["tienda"]["id"], 3);
    }
}
