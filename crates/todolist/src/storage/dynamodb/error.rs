//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `todolist_core::storage`.
//! Failures to reach the service become `ConnectionFailed`; everything the
//! service itself rejected becomes `QueryFailed` with the service's reason.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;

use todolist_core::storage::RepositoryError;

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    match err {
        SdkError::DispatchFailure(e) => RepositoryError::ConnectionFailed(format!("{:?}", e)),
        SdkError::TimeoutError(_) => {
            RepositoryError::ConnectionFailed("Request timed out".to_string())
        }
        err => match err.into_service_error() {
            GetItemError::ResourceNotFoundException(_) => {
                RepositoryError::QueryFailed("Table not found".to_string())
            }
            GetItemError::ProvisionedThroughputExceededException(_) => {
                RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
            }
            GetItemError::RequestLimitExceeded(_) => {
                RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
            }
            GetItemError::InternalServerError(_) => {
                RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
            }
            err => RepositoryError::QueryFailed(format!("GetItem failed: {:?}", err)),
        },
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    match err {
        SdkError::DispatchFailure(e) => RepositoryError::ConnectionFailed(format!("{:?}", e)),
        SdkError::TimeoutError(_) => {
            RepositoryError::ConnectionFailed("Request timed out".to_string())
        }
        err => match err.into_service_error() {
            PutItemError::ResourceNotFoundException(_) => {
                RepositoryError::QueryFailed("Table not found".to_string())
            }
            PutItemError::ProvisionedThroughputExceededException(_) => {
                RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
            }
            PutItemError::RequestLimitExceeded(_) => {
                RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
            }
            PutItemError::InternalServerError(_) => {
                RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
            }
            err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
        },
    }
}

/// Map an UpdateItem SDK error to RepositoryError.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
) -> RepositoryError {
    match err {
        SdkError::DispatchFailure(e) => RepositoryError::ConnectionFailed(format!("{:?}", e)),
        SdkError::TimeoutError(_) => {
            RepositoryError::ConnectionFailed("Request timed out".to_string())
        }
        err => match err.into_service_error() {
            UpdateItemError::ResourceNotFoundException(_) => {
                RepositoryError::QueryFailed("Table not found".to_string())
            }
            UpdateItemError::ProvisionedThroughputExceededException(_) => {
                RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
            }
            UpdateItemError::RequestLimitExceeded(_) => {
                RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
            }
            UpdateItemError::InternalServerError(_) => {
                RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
            }
            err => RepositoryError::QueryFailed(format!("UpdateItem failed: {:?}", err)),
        },
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> RepositoryError {
    match err {
        SdkError::DispatchFailure(e) => RepositoryError::ConnectionFailed(format!("{:?}", e)),
        SdkError::TimeoutError(_) => {
            RepositoryError::ConnectionFailed("Request timed out".to_string())
        }
        err => match err.into_service_error() {
            DeleteItemError::ResourceNotFoundException(_) => {
                RepositoryError::QueryFailed("Table not found".to_string())
            }
            DeleteItemError::ProvisionedThroughputExceededException(_) => {
                RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
            }
            DeleteItemError::RequestLimitExceeded(_) => {
                RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
            }
            DeleteItemError::InternalServerError(_) => {
                RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
            }
            err => RepositoryError::QueryFailed(format!("DeleteItem failed: {:?}", err)),
        },
    }
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    match err {
        SdkError::DispatchFailure(e) => RepositoryError::ConnectionFailed(format!("{:?}", e)),
        SdkError::TimeoutError(_) => {
            RepositoryError::ConnectionFailed("Request timed out".to_string())
        }
        err => match err.into_service_error() {
            ScanError::ResourceNotFoundException(_) => {
                RepositoryError::QueryFailed("Table not found".to_string())
            }
            ScanError::ProvisionedThroughputExceededException(_) => {
                RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
            }
            ScanError::RequestLimitExceeded(_) => {
                RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
            }
            ScanError::InternalServerError(_) => {
                RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
            }
            err => RepositoryError::QueryFailed(format!("Scan failed: {:?}", err)),
        },
    }
}
