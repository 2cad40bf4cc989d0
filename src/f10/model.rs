use crate::core::wire::{self, Extra, alias_priority};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct F10TimePoint {
    #[serde(deserialize_with = "wire::opt_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub value: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct F10TopHolderItem {
    #[serde(alias = "chg", deserialize_with = "wire::opt_f64")]
    pub change: Option<f64>,
    #[serde(alias = "held_num", deserialize_with = "wire::opt_f64")]
    pub held_shares: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub held_ratio: Option<f64>,
    #[serde(alias = "holder_name", deserialize_with = "wire::opt_string")]
    pub shareholder_name: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(F10TopHolderItem {
    ["chg", "change"],
    ["held_num", "held_shares"],
    ["holder_name", "shareholder_name"],
});

impl F10TopHolderItem {
    pub fn chg(&self) -> Option<f64> {
        self.change
    }

    pub fn held_num(&self) -> Option<f64> {
        self.held_shares
    }

    pub fn holder_name(&self) -> Option<&str> {
        self.shareholder_name.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct F10TopHoldersData {
    /// Available report dates; pick one to page through history on the web UI.
    #[serde(deserialize_with = "wire::list")]
    pub times: Vec<F10TimePoint>,
    #[serde(deserialize_with = "wire::list")]
    pub items: Vec<F10TopHolderItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct F10MainIndicatorItem {
    #[serde(deserialize_with = "wire::opt_f64")]
    pub asset_liab_ratio: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub net_profit_atsopc_yoy: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub operating_income_yoy: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub basic_eps: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub net_selling_rate: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub avg_roe: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub gross_selling_rate: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub float_shares: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub pb: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub np_per_share: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub float_market_capital: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub total_revenue: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub market_capital: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub pe_ttm: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub dividend: Option<f64>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub dividend_yield: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub net_profit_atsopc: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub total_shares: Option<f64>,
    /// Upstream sends the period label (e.g. `2024三季报`) under `report_date`.
    #[serde(alias = "report_date", deserialize_with = "wire::opt_string")]
    pub report_name: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(F10MainIndicatorItem {
    ["report_date", "report_name"],
});

impl F10MainIndicatorItem {
    pub fn report_date(&self) -> Option<&str> {
        self.report_name.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct F10MainIndicatorData {
    #[serde(deserialize_with = "wire::list")]
    pub items: Vec<F10MainIndicatorItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct F10ShareholderCountItem {
    #[serde(alias = "chg", deserialize_with = "wire::opt_f64")]
    pub change: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub price: Option<f64>,
    #[serde(alias = "ashare_holder", deserialize_with = "wire::opt_i64")]
    pub a_share_holders: Option<i64>,
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(F10ShareholderCountItem {
    ["chg", "change"],
    ["ashare_holder", "a_share_holders"],
});

impl F10ShareholderCountItem {
    pub fn chg(&self) -> Option<f64> {
        self.change
    }

    pub fn ashare_holder(&self) -> Option<i64> {
        self.a_share_holders
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct F10ShareholderCountData {
    #[serde(deserialize_with = "wire::list")]
    pub items: Vec<F10ShareholderCountItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct F10OrgHoldingChangeItem {
    #[serde(alias = "chg_date", deserialize_with = "wire::opt_string")]
    pub report_name: Option<String>,
    #[serde(alias = "institution_num", deserialize_with = "wire::opt_string")]
    pub institution_count: Option<String>,
    #[serde(alias = "chg", deserialize_with = "wire::opt_f64")]
    pub change: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub held_ratio: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(F10OrgHoldingChangeItem {
    ["chg_date", "report_name"],
    ["institution_num", "institution_count"],
    ["chg", "change"],
});

impl F10OrgHoldingChangeItem {
    pub fn chg_date(&self) -> Option<&str> {
        self.report_name.as_deref()
    }

    pub fn institution_num(&self) -> Option<&str> {
        self.institution_count.as_deref()
    }

    pub fn chg(&self) -> Option<f64> {
        self.change
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct F10OrgHoldingChangeData {
    #[serde(deserialize_with = "wire::list")]
    pub items: Vec<F10OrgHoldingChangeItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct F10BonusAddition {
    #[serde(deserialize_with = "wire::opt_f64")]
    pub actual_issue_vol: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub actual_issue_price: Option<f64>,
    #[serde(alias = "listing_ad", deserialize_with = "wire::opt_datetime")]
    pub listing_at: Option<DateTime<Utc>>,
    #[serde(alias = "actual_rc_net_amt", deserialize_with = "wire::opt_f64")]
    pub actual_raised_net_amount: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(F10BonusAddition {
    ["listing_ad", "listing_at"],
    ["actual_rc_net_amt", "actual_raised_net_amount"],
});

impl F10BonusAddition {
    pub fn listing_ad(&self) -> Option<DateTime<Utc>> {
        self.listing_at
    }

    pub fn actual_rc_net_amt(&self) -> Option<f64> {
        self.actual_raised_net_amount
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct F10BonusDividendItem {
    #[serde(deserialize_with = "wire::opt_string")]
    pub dividend_year: Option<String>,
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub ashare_ex_dividend_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub plan_explain: Option<String>,
    #[serde(alias = "cancle_dividend_date", deserialize_with = "wire::opt_datetime")]
    pub cancel_dividend_date: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(F10BonusDividendItem {
    ["cancel_dividend_date", "cancle_dividend_date"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct F10BonusData {
    #[serde(alias = "addtions", deserialize_with = "wire::list")]
    pub additions: Vec<F10BonusAddition>,
    #[serde(deserialize_with = "wire::object_list")]
    pub allots: Vec<Extra>,
    #[serde(deserialize_with = "wire::list")]
    pub items: Vec<F10BonusDividendItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(F10BonusData {
    ["additions", "addtions"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct F10IndustryCompareStats {
    #[serde(deserialize_with = "wire::opt_f64")]
    pub pe_ttm: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub basic_eps: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub avg_roe: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub gross_selling_rate: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub total_revenue: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub net_profit_atsopc: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub np_per_share: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub operate_cash_flow_ps: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub total_assets: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub total_shares: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct F10IndustryCompareItem {
    #[serde(deserialize_with = "wire::opt_string")]
    pub symbol: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub name: Option<String>,

    #[serde(deserialize_with = "wire::opt_f64")]
    pub basic_eps: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub total_revenue: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub gross_selling_rate: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub net_profit_atsopc: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub np_per_share: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub avg_roe: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub pe_ttm: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub total_assets: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub operate_cash_flow_ps: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub total_shares: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct F10IndustryCompareData {
    #[serde(alias = "ind_name", deserialize_with = "wire::opt_string")]
    pub industry_name: Option<String>,
    #[serde(alias = "quote_time", deserialize_with = "wire::opt_datetime")]
    pub quote_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "wire::opt_object")]
    pub avg: Option<F10IndustryCompareStats>,
    #[serde(deserialize_with = "wire::opt_object")]
    pub min: Option<F10IndustryCompareStats>,
    #[serde(deserialize_with = "wire::opt_object")]
    pub max: Option<F10IndustryCompareStats>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub count: Option<i64>,
    #[serde(alias = "ind_code", deserialize_with = "wire::opt_string")]
    pub industry_code: Option<String>,
    #[serde(alias = "ind_class", deserialize_with = "wire::opt_string")]
    pub industry_class: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub report_name: Option<String>,
    #[serde(deserialize_with = "wire::list")]
    pub items: Vec<F10IndustryCompareItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(F10IndustryCompareData {
    ["ind_name", "industry_name"],
    ["quote_time", "quote_at"],
    ["ind_code", "industry_code"],
    ["ind_class", "industry_class"],
});

impl F10IndustryCompareData {
    pub fn ind_name(&self) -> Option<&str> {
        self.industry_name.as_deref()
    }

    pub fn quote_time(&self) -> Option<DateTime<Utc>> {
        self.quote_at
    }

    pub fn ind_code(&self) -> Option<&str> {
        self.industry_code.as_deref()
    }

    pub fn ind_class(&self) -> Option<&str> {
        self.industry_class.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct F10IndustryTag {
    #[serde(alias = "ind_code", deserialize_with = "wire::opt_string")]
    pub code: Option<String>,
    #[serde(alias = "ind_name", deserialize_with = "wire::opt_string")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(F10IndustryTag {
    ["ind_code", "code"],
    ["ind_name", "name"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct F10IndustryCompanyInfo {
    #[serde(alias = "classi_name", deserialize_with = "wire::opt_string")]
    pub classification_name: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub provincial_name: Option<String>,
    #[serde(alias = "listed_date", deserialize_with = "wire::opt_datetime")]
    pub listed_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub main_operation_business: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub org_name_cn: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub actual_controller: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(F10IndustryCompanyInfo {
    ["classi_name", "classification_name"],
    ["listed_date", "listed_at"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct F10IndustryData {
    #[serde(alias = "concept", deserialize_with = "wire::list")]
    pub concepts: Vec<F10IndustryTag>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub concept_class: Option<String>,
    #[serde(alias = "industry", deserialize_with = "wire::list")]
    pub industries: Vec<F10IndustryTag>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub industry_class: Option<String>,
    #[serde(deserialize_with = "wire::opt_object")]
    pub company: Option<F10IndustryCompanyInfo>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(F10IndustryData {
    ["concept", "concepts"],
    ["industry", "industries"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct F10BusinessAnalysisItem {
    #[serde(alias = "report_date", deserialize_with = "wire::opt_string")]
    pub report_name: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub operating_analysis_explain: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(F10BusinessAnalysisItem {
    ["report_date", "report_name"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct F10BusinessAnalysisData {
    #[serde(deserialize_with = "wire::list")]
    pub items: Vec<F10BusinessAnalysisItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct F10SkholderItem {
    #[serde(alias = "personal_name", deserialize_with = "wire::opt_string")]
    pub person_name: Option<String>,
    #[serde(alias = "position_name", deserialize_with = "wire::opt_string")]
    pub position: Option<String>,
    #[serde(alias = "employ_date", deserialize_with = "wire::opt_datetime")]
    pub employment_start: Option<DateTime<Utc>>,
    #[serde(alias = "employ_ed", deserialize_with = "wire::opt_datetime")]
    pub employment_end: Option<DateTime<Utc>>,
    #[serde(alias = "resume_cn", deserialize_with = "wire::opt_string")]
    pub resume: Option<String>,
    #[serde(alias = "held_num", deserialize_with = "wire::opt_f64")]
    pub held_shares: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub annual_salary: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(F10SkholderItem {
    ["personal_name", "person_name"],
    ["position_name", "position"],
    ["employ_date", "employment_start"],
    ["employ_ed", "employment_end"],
    ["resume_cn", "resume"],
    ["held_num", "held_shares"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct F10SkholderData {
    #[serde(deserialize_with = "wire::list")]
    pub items: Vec<F10SkholderItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct F10SkholderChangeItem {
    #[serde(alias = "manage_name", deserialize_with = "wire::opt_string")]
    pub manager_name: Option<String>,
    #[serde(alias = "chg_date", deserialize_with = "wire::opt_datetime")]
    pub change_date: Option<DateTime<Utc>>,
    #[serde(alias = "trans_avg_price", deserialize_with = "wire::opt_f64")]
    pub transaction_avg_price: Option<f64>,
    #[serde(alias = "chg_shares_num", deserialize_with = "wire::opt_f64")]
    pub change_shares: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(F10SkholderChangeItem {
    ["manage_name", "manager_name"],
    ["chg_date", "change_date"],
    ["trans_avg_price", "transaction_avg_price"],
    ["chg_shares_num", "change_shares"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct F10SkholderChangeData {
    #[serde(deserialize_with = "wire::list")]
    pub items: Vec<F10SkholderChangeItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct F10SharesChangeItem {
    #[serde(alias = "chg_date", deserialize_with = "wire::opt_datetime")]
    pub change_date: Option<DateTime<Utc>>,
    #[serde(alias = "chg_reason", deserialize_with = "wire::opt_string")]
    pub change_reason: Option<String>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub float_shares: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub total_shares: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(F10SharesChangeItem {
    ["chg_date", "change_date"],
    ["chg_reason", "change_reason"],
});

/// A lock-up expiry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct F10SharesRestrictionItem {
    #[serde(alias = "ft_time", deserialize_with = "wire::opt_datetime")]
    pub release_time: Option<DateTime<Utc>>,
    #[serde(alias = "ft_ratio", deserialize_with = "wire::opt_f64")]
    pub release_ratio: Option<f64>,
    #[serde(alias = "ft_nums", deserialize_with = "wire::opt_f64")]
    pub release_shares: Option<f64>,
    #[serde(alias = "ft_type", deserialize_with = "wire::opt_string")]
    pub release_type: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(F10SharesRestrictionItem {
    ["ft_time", "release_time"],
    ["ft_ratio", "release_ratio"],
    ["ft_nums", "release_shares"],
    ["ft_type", "release_type"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct F10SharesChangeData {
    #[serde(deserialize_with = "wire::list")]
    pub items: Vec<F10SharesChangeItem>,
    #[serde(alias = "restricts", deserialize_with = "wire::list")]
    pub restrictions: Vec<F10SharesRestrictionItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(F10SharesChangeData {
    ["restricts", "restrictions"],
});
