use axum::{extract::rejection::JsonRejection, extract::State, Json};
use common::types::{ImportSummary, MessageBody};
use service::storage::Record;
use tracing::{error, warn};

use crate::errors::ApiError;
use crate::routes::AppState;

/// 获取全部记录
pub async fn list_expenses(State(state): State<AppState>) -> Result<Json<Vec<Record>>, ApiError> {
    state.expenses.list().await.map(Json).map_err(|e| {
        error!(error = %e, "failed to read expenses");
        ApiError::Internal("Error al leer datos")
    })
}

/// 追加一条记录并原样返回
pub async fn append_expense(
    State(state): State<AppState>,
    payload: Result<Json<Record>, JsonRejection>,
) -> Result<Json<Record>, ApiError> {
    let Json(record) = payload?;
    state.expenses.append(record).await.map(Json).map_err(|e| {
        error!(error = %e, "failed to save expense");
        ApiError::Internal("Error al guardar datos")
    })
}

/// 清空集合
pub async fn clear_expenses(State(state): State<AppState>) -> Result<Json<MessageBody>, ApiError> {
    state
        .expenses
        .clear()
        .await
        .map(|_| Json(MessageBody { message: "Todos los gastos eliminados" }))
        .map_err(|e| {
            error!(error = %e, "failed to clear expenses");
            ApiError::Internal("Error al eliminar datos")
        })
}

/// 整体替换集合（导入）；非数组请求体直接拒绝，不写文件
pub async fn replace_expenses(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<ImportSummary>, ApiError> {
    let Json(body) = payload?;
    let serde_json::Value::Array(records) = body else {
        warn!("replace rejected: body is not an array");
        return Err(ApiError::BadRequest("Se esperaba un arreglo de gastos"));
    };
    let count = state.expenses.replace(records).await.map_err(|e| {
        error!(error = %e, "failed to import expenses");
        ApiError::Internal("Error al importar datos")
    })?;
    Ok(Json(ImportSummary { message: "Datos importados correctamente", count }))
}
