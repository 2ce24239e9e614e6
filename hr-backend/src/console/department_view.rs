// src/console/department_view.rs

use super::{required, FormError};
use crate::api::dto::department_dto::CreateDepartmentRequest;
use crate::api::dto::employee_dto::CreateEmployeeRequest;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepartmentScreen {
    #[default]
    List,
    Detail(Uuid),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    AddDepartment,
    EditDepartment(Uuid),
    AddEmployee,
    EditEmployee(Uuid),
}

/// 部署詳細のタブ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Employees,
    SkillMatrix,
    DepartmentInfo,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("{0:?} cannot be opened on this screen")]
    WrongScreen(Dialog),

    #[error("Another dialog is already open")]
    DialogOpen,

    #[error("Not on a department detail screen")]
    NotInDetail,
}

#[derive(Debug, Clone, Default)]
pub struct DepartmentView {
    screen: DepartmentScreen,
    dialog: Option<Dialog>,
    tab: DetailTab,
}

impl DepartmentView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> DepartmentScreen {
        self.screen
    }

    pub fn dialog(&self) -> Option<Dialog> {
        self.dialog
    }

    pub fn tab(&self) -> DetailTab {
        self.tab
    }

    pub fn selected_department(&self) -> Option<Uuid> {
        match self.screen {
            DepartmentScreen::Detail(id) => Some(id),
            DepartmentScreen::List => None,
        }
    }

    /// 一覧から部署を選ぶ。開くタブは常に社員一覧
    pub fn open_department(&mut self, id: Uuid) -> Result<(), ViewError> {
        if self.dialog.is_some() {
            return Err(ViewError::DialogOpen);
        }
        self.screen = DepartmentScreen::Detail(id);
        self.tab = DetailTab::Employees;
        Ok(())
    }

    pub fn select_tab(&mut self, tab: DetailTab) -> Result<(), ViewError> {
        if self.selected_department().is_none() {
            return Err(ViewError::NotInDetail);
        }
        self.tab = tab;
        Ok(())
    }

    /// 部署の追加は一覧でのみ、社員の追加・編集は詳細でのみ開ける
    pub fn open_dialog(&mut self, dialog: Dialog) -> Result<(), ViewError> {
        if self.dialog.is_some() {
            return Err(ViewError::DialogOpen);
        }
        let allowed = match (dialog, self.screen) {
            (Dialog::AddDepartment, DepartmentScreen::List) => true,
            (Dialog::EditDepartment(_), DepartmentScreen::List) => true,
            (Dialog::EditDepartment(id), DepartmentScreen::Detail(current)) => id == current,
            (Dialog::AddEmployee | Dialog::EditEmployee(_), DepartmentScreen::Detail(_)) => true,
            _ => false,
        };
        if !allowed {
            return Err(ViewError::WrongScreen(dialog));
        }
        self.dialog = Some(dialog);
        Ok(())
    }

    pub fn close_dialog(&mut self) -> Option<Dialog> {
        self.dialog.take()
    }

    /// ダイアログが開いていれば閉じ、なければ一覧に戻る
    pub fn back(&mut self) {
        if self.dialog.take().is_some() {
            return;
        }
        self.screen = DepartmentScreen::List;
        self.tab = DetailTab::default();
    }

    /// 表示中の部署が削除されたとき
    pub fn department_removed(&mut self, id: Uuid) {
        if self.selected_department() == Some(id) {
            self.dialog = None;
            self.screen = DepartmentScreen::List;
            self.tab = DetailTab::default();
        }
    }
}

/// 部署追加フォーム
#[derive(Debug, Clone, Default)]
pub struct DepartmentForm {
    pub name: String,
}

impl DepartmentForm {
    pub fn to_request(&self) -> Result<CreateDepartmentRequest, FormError> {
        Ok(CreateDepartmentRequest {
            name: required(&self.name, "Department name")?,
        })
    }
}

/// 社員追加フォーム (3項目とも必須)
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    pub name: String,
    pub employee_code: String,
    pub position: String,
}

impl EmployeeForm {
    pub fn to_request(&self) -> Result<CreateEmployeeRequest, FormError> {
        Ok(CreateEmployeeRequest {
            name: required(&self.name, "Name")?,
            employee_code: required(&self.employee_code, "Employee code")?,
            position: required(&self.position, "Position")?,
        })
    }
}
