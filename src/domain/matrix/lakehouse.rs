//! The compiled-in lakehouse estimate table.
//!
//! Values are hand-authored estimates: monthly USD prices and calendar days to
//! a first working deployment.

use crate::domain::foundation::Component::{
    DashboardsBi, DataIngestion, DataProcessing, DataStorage, ExploratoryAnalysis, MlServing,
    MlTraining,
};
use crate::domain::foundation::Level::{High, Low, Moderate};
use crate::domain::foundation::Technology::{
    AwsManaged, AzureManaged, DatabricksManaged, GcpManaged, SelfHosted,
};

use super::MatrixRow;

/// Every (component, technology) pair, grouped by component in canonical order.
pub static LAKEHOUSE_MATRIX: [MatrixRow; 35] = [
    // Data Storage
    MatrixRow::new(DataStorage, AwsManaged, Low, 15, Low, 4, Low),
    MatrixRow::new(DataStorage, AzureManaged, Low, 13, Low, 5, Low),
    MatrixRow::new(DataStorage, GcpManaged, Low, 15, Low, 4, Low),
    MatrixRow::not_applicable(DataStorage, DatabricksManaged),
    MatrixRow::new(DataStorage, SelfHosted, Moderate, 30, Moderate, 14, High),
    // Data Ingestion
    MatrixRow::new(DataIngestion, AwsManaged, Low, 18, Low, 7, Low),
    MatrixRow::new(DataIngestion, AzureManaged, Low, 18, Low, 7, Low),
    MatrixRow::new(DataIngestion, GcpManaged, Low, 18, Low, 7, Low),
    MatrixRow::new(DataIngestion, DatabricksManaged, Moderate, 25, Low, 5, Low),
    MatrixRow::new(DataIngestion, SelfHosted, Moderate, 15, Moderate, 14, High),
    // Data Processing (ETL/ELT)
    MatrixRow::new(DataProcessing, AwsManaged, Moderate, 40, Low, 9, Low),
    MatrixRow::new(DataProcessing, AzureManaged, Moderate, 42, Low, 7, Low),
    MatrixRow::new(DataProcessing, GcpManaged, Moderate, 40, Low, 8, Low),
    MatrixRow::new(DataProcessing, DatabricksManaged, Moderate, 55, Low, 5, Low),
    MatrixRow::new(DataProcessing, SelfHosted, Moderate, 30, Moderate, 20, High),
    // Machine Learning Training
    MatrixRow::new(MlTraining, AwsManaged, Moderate, 80, Moderate, 20, Moderate),
    MatrixRow::new(MlTraining, AzureManaged, Moderate, 85, Moderate, 22, Moderate),
    MatrixRow::new(MlTraining, GcpManaged, Moderate, 75, Moderate, 20, Moderate),
    MatrixRow::new(MlTraining, DatabricksManaged, Moderate, 100, Low, 15, Moderate),
    MatrixRow::new(MlTraining, SelfHosted, High, 70, High, 40, High),
    // Machine Learning Serving (Inference)
    MatrixRow::new(MlServing, AwsManaged, High, 100, Low, 7, Low),
    MatrixRow::new(MlServing, AzureManaged, High, 100, Low, 7, Low),
    MatrixRow::new(MlServing, GcpManaged, High, 90, Low, 7, Low),
    MatrixRow::new(MlServing, DatabricksManaged, High, 115, Low, 5, Low),
    MatrixRow::new(MlServing, SelfHosted, Moderate, 80, High, 20, High),
    // Exploratory Data Analysis
    MatrixRow::new(ExploratoryAnalysis, AwsManaged, Moderate, 25, Low, 7, Moderate),
    MatrixRow::new(ExploratoryAnalysis, AzureManaged, Moderate, 28, Low, 7, Moderate),
    MatrixRow::new(ExploratoryAnalysis, GcpManaged, Moderate, 22, Low, 7, Moderate),
    MatrixRow::new(ExploratoryAnalysis, DatabricksManaged, Moderate, 35, Low, 5, Moderate),
    MatrixRow::new(ExploratoryAnalysis, SelfHosted, Low, 15, Moderate, 14, Moderate),
    // Dashboards / BI
    MatrixRow::new(DashboardsBi, AwsManaged, Moderate, 35, Low, 7, Low),
    MatrixRow::new(DashboardsBi, AzureManaged, Moderate, 40, Low, 7, Low),
    MatrixRow::new(DashboardsBi, GcpManaged, Moderate, 35, Low, 7, Low),
    MatrixRow::new(DashboardsBi, DatabricksManaged, Moderate, 45, Low, 5, Low),
    MatrixRow::new(DashboardsBi, SelfHosted, Low, 20, Moderate, 14, Low),
];
