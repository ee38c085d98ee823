//! Catalog of every configuration object type exposed under `/api/v2/cmdb`.
//!
//! Each entry names a CMDB path and whether it is a keyed table or a
//! singleton. Tables marked `[without_unset]` are predefined databases or
//! replacement messages that the appliance refuses to delete; deleting one is
//! a local no-op.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::object::{dotted, ObjectType, Singleton, Table};

macro_rules! catalog {
    (
        tables {
            $($table:ident => $table_path:literal $([$flag:ident])?;)*
        }
        singletons {
            $($single:ident => $single_path:literal;)*
        }
    ) => {
        $(pub static $table: Table = Table::new($table_path)$(.$flag())?;)*
        $(pub static $single: Singleton = Singleton::new($single_path);)*

        /// Every keyed table type, grouped by module.
        pub static TABLES: &[&Table] = &[$(&$table),*];

        /// Every singleton type, grouped by module.
        pub static SINGLETONS: &[&Singleton] = &[$(&$single),*];
    };
}

catalog! {
    tables {
        ANTIVIRUS_PROFILE => "antivirus/profile";

        APPLICATION_CUSTOM => "application/custom";
        APPLICATION_GROUP => "application/group";
        APPLICATION_LIST => "application/list";
        APPLICATION_NAME => "application/name" [without_unset];
        APPLICATION_RULE_SETTINGS => "application/rule-settings";

        AUTHENTICATION_RULE => "authentication/rule";
        AUTHENTICATION_SCHEME => "authentication/scheme";

        CERTIFICATE_CA => "certificate/ca";
        CERTIFICATE_CRL => "certificate/crl";
        CERTIFICATE_LOCAL => "certificate/local";
        CERTIFICATE_REMOTE => "certificate/remote";

        CIFS_DOMAIN_CONTROLLER => "cifs/domain-controller";
        CIFS_PROFILE => "cifs/profile";

        CREDENTIAL_STORE_DOMAIN_CONTROLLER => "credential-store/domain-controller";

        DLP_DATA_TYPE => "dlp/data-type";
        DLP_DICTIONARY => "dlp/dictionary";
        DLP_FILEPATTERN => "dlp/filepattern";
        DLP_FP_DOC_SOURCE => "dlp/fp-doc-source";
        DLP_PROFILE => "dlp/profile";
        DLP_SENSITIVITY => "dlp/sensitivity";
        DLP_SENSOR => "dlp/sensor";

        DNSFILTER_DOMAIN_FILTER => "dnsfilter/domain-filter";
        DNSFILTER_PROFILE => "dnsfilter/profile";

        EMAILFILTER_BLOCK_ALLOW_LIST => "emailfilter/block-allow-list";
        EMAILFILTER_BWL => "emailfilter/bwl";
        EMAILFILTER_BWORD => "emailfilter/bword";
        EMAILFILTER_DNSBL => "emailfilter/dnsbl";
        EMAILFILTER_IPTRUST => "emailfilter/iptrust";
        EMAILFILTER_MHEADER => "emailfilter/mheader";
        EMAILFILTER_PROFILE => "emailfilter/profile";

        ENDPOINT_CONTROL_CLIENT => "endpoint-control/client";
        ENDPOINT_CONTROL_FCTEMS => "endpoint-control/fctems";
        ENDPOINT_CONTROL_FORTICLIENT_EMS => "endpoint-control/forticlient-ems";
        ENDPOINT_CONTROL_FORTICLIENT_REGISTRATION_SYNC => "endpoint-control/forticlient-registration-sync";
        ENDPOINT_CONTROL_PROFILE => "endpoint-control/profile";

        EXTENDER_CONTROLLER_DATAPLAN => "extender-controller/dataplan";
        EXTENDER_CONTROLLER_EXTENDER => "extender-controller/extender";

        EXTENSION_CONTROLLER_EXTENDER => "extension-controller/extender";

        FILE_FILTER_PROFILE => "file-filter/profile";

        FIREWALL_ACCESS_PROXY => "firewall/access-proxy";
        FIREWALL_ACCESS_PROXY_VIRTUAL_HOST => "firewall/access-proxy-virtual-host";
        FIREWALL_ADDRESS => "firewall/address";
        FIREWALL_ADDRESS6 => "firewall/address6";
        FIREWALL_ADDRESS6_TEMPLATE => "firewall/address6-template";
        FIREWALL_ADDRGRP => "firewall/addrgrp";
        FIREWALL_ADDRGRP6 => "firewall/addrgrp6";
        FIREWALL_CENTRAL_SNAT_MAP => "firewall/central-snat-map";
        FIREWALL_CITY => "firewall/city" [without_unset];
        FIREWALL_COUNTRY => "firewall/country" [without_unset];
        FIREWALL_DECRYPTED_TRAFFIC_MIRROR => "firewall/decrypted-traffic-mirror";
        FIREWALL_DNSTRANSLATION => "firewall/dnstranslation";
        FIREWALL_DOS_POLICY => "firewall/DoS-policy";
        FIREWALL_DOS_POLICY6 => "firewall/DoS-policy6";
        FIREWALL_IDENTITY_BASED_ROUTE => "firewall/identity-based-route";
        FIREWALL_INTERFACE_POLICY => "firewall/interface-policy";
        FIREWALL_INTERFACE_POLICY6 => "firewall/interface-policy6";
        FIREWALL_INTERNET_SERVICE => "firewall/internet-service" [without_unset];
        FIREWALL_INTERNET_SERVICE_ADDITION => "firewall/internet-service-addition";
        FIREWALL_INTERNET_SERVICE_BOTNET => "firewall/internet-service-botnet" [without_unset];
        FIREWALL_INTERNET_SERVICE_CUSTOM => "firewall/internet-service-custom";
        FIREWALL_INTERNET_SERVICE_CUSTOM_GROUP => "firewall/internet-service-custom-group";
        FIREWALL_INTERNET_SERVICE_DEFINITION => "firewall/internet-service-definition";
        FIREWALL_INTERNET_SERVICE_EXTENSION => "firewall/internet-service-extension";
        FIREWALL_INTERNET_SERVICE_GROUP => "firewall/internet-service-group";
        FIREWALL_INTERNET_SERVICE_IPBL_REASON => "firewall/internet-service-ipbl-reason" [without_unset];
        FIREWALL_INTERNET_SERVICE_IPBL_VENDOR => "firewall/internet-service-ipbl-vendor" [without_unset];
        FIREWALL_INTERNET_SERVICE_LIST => "firewall/internet-service-list" [without_unset];
        FIREWALL_INTERNET_SERVICE_NAME => "firewall/internet-service-name" [without_unset];
        FIREWALL_INTERNET_SERVICE_OWNER => "firewall/internet-service-owner" [without_unset];
        FIREWALL_INTERNET_SERVICE_REPUTATION => "firewall/internet-service-reputation" [without_unset];
        FIREWALL_INTERNET_SERVICE_SLD => "firewall/internet-service-sld" [without_unset];
        FIREWALL_IP_TRANSLATION => "firewall/ip-translation";
        FIREWALL_IPPOOL => "firewall/ippool";
        FIREWALL_IPPOOL6 => "firewall/ippool6";
        FIREWALL_LDB_MONITOR => "firewall/ldb-monitor";
        FIREWALL_LOCAL_IN_POLICY => "firewall/local-in-policy";
        FIREWALL_LOCAL_IN_POLICY6 => "firewall/local-in-policy6";
        FIREWALL_MULTICAST_ADDRESS => "firewall/multicast-address";
        FIREWALL_MULTICAST_ADDRESS6 => "firewall/multicast-address6";
        FIREWALL_MULTICAST_POLICY => "firewall/multicast-policy";
        FIREWALL_MULTICAST_POLICY6 => "firewall/multicast-policy6";
        FIREWALL_POLICY => "firewall/policy";
        FIREWALL_POLICY46 => "firewall/policy46";
        FIREWALL_POLICY6 => "firewall/policy6";
        FIREWALL_POLICY64 => "firewall/policy64";
        FIREWALL_PROFILE_GROUP => "firewall/profile-group";
        FIREWALL_PROFILE_PROTOCOL_OPTIONS => "firewall/profile-protocol-options";
        FIREWALL_PROXY_ADDRESS => "firewall/proxy-address";
        FIREWALL_PROXY_ADDRGRP => "firewall/proxy-addrgrp";
        FIREWALL_PROXY_POLICY => "firewall/proxy-policy";
        FIREWALL_REGION => "firewall/region" [without_unset];
        FIREWALL_SECURITY_POLICY => "firewall/security-policy";
        FIREWALL_SHAPING_POLICY => "firewall/shaping-policy";
        FIREWALL_SHAPING_PROFILE => "firewall/shaping-profile";
        FIREWALL_SNIFFER => "firewall/sniffer";
        FIREWALL_SSL_SERVER => "firewall/ssl-server";
        FIREWALL_SSL_SSH_PROFILE => "firewall/ssl-ssh-profile";
        FIREWALL_TRAFFIC_CLASS => "firewall/traffic-class";
        FIREWALL_TTL_POLICY => "firewall/ttl-policy";
        FIREWALL_VENDOR_MAC => "firewall/vendor-mac" [without_unset];
        FIREWALL_VIP => "firewall/vip";
        FIREWALL_VIP46 => "firewall/vip46";
        FIREWALL_VIP6 => "firewall/vip6";
        FIREWALL_VIP64 => "firewall/vip64";
        FIREWALL_VIPGRP => "firewall/vipgrp";
        FIREWALL_VIPGRP46 => "firewall/vipgrp46";
        FIREWALL_VIPGRP6 => "firewall/vipgrp6";
        FIREWALL_VIPGRP64 => "firewall/vipgrp64";

        FIREWALL_CONSOLIDATED_POLICY => "firewall.consolidated/policy";

        FIREWALL_IPMACBINDING_TABLE => "firewall.ipmacbinding/table";

        FIREWALL_SCHEDULE_GROUP => "firewall.schedule/group";
        FIREWALL_SCHEDULE_ONETIME => "firewall.schedule/onetime";
        FIREWALL_SCHEDULE_RECURRING => "firewall.schedule/recurring";

        FIREWALL_SERVICE_CATEGORY => "firewall.service/category";
        FIREWALL_SERVICE_CUSTOM => "firewall.service/custom";
        FIREWALL_SERVICE_GROUP => "firewall.service/group";

        FIREWALL_SHAPER_PER_IP_SHAPER => "firewall.shaper/per-ip-shaper";
        FIREWALL_SHAPER_TRAFFIC_SHAPER => "firewall.shaper/traffic-shaper";

        FIREWALL_SSH_HOST_KEY => "firewall.ssh/host-key";
        FIREWALL_SSH_LOCAL_CA => "firewall.ssh/local-ca";
        FIREWALL_SSH_LOCAL_KEY => "firewall.ssh/local-key";

        FIREWALL_WILDCARD_FQDN_CUSTOM => "firewall.wildcard-fqdn/custom";
        FIREWALL_WILDCARD_FQDN_GROUP => "firewall.wildcard-fqdn/group";

        ICAP_PROFILE => "icap/profile";
        ICAP_SERVER => "icap/server";
        ICAP_SERVER_GROUP => "icap/server-group";

        IPS_CUSTOM => "ips/custom";
        IPS_DECODER => "ips/decoder";
        IPS_RULE => "ips/rule" [without_unset];
        IPS_RULE_SETTINGS => "ips/rule-settings";
        IPS_SENSOR => "ips/sensor";
        IPS_VIEW_MAP => "ips/view-map";

        LOG_CUSTOM_FIELD => "log/custom-field";

        NSXT_SERVICE_CHAIN => "nsxt/service-chain";

        REPORT_CHART => "report/chart";
        REPORT_DATASET => "report/dataset";
        REPORT_LAYOUT => "report/layout";
        REPORT_STYLE => "report/style";
        REPORT_THEME => "report/theme";

        ROUTER_ACCESS_LIST => "router/access-list";
        ROUTER_ACCESS_LIST6 => "router/access-list6";
        ROUTER_ASPATH_LIST => "router/aspath-list";
        ROUTER_AUTH_PATH => "router/auth-path";
        ROUTER_COMMUNITY_LIST => "router/community-list";
        ROUTER_KEY_CHAIN => "router/key-chain";
        ROUTER_MULTICAST_FLOW => "router/multicast-flow";
        ROUTER_POLICY => "router/policy";
        ROUTER_POLICY6 => "router/policy6";
        ROUTER_PREFIX_LIST => "router/prefix-list";
        ROUTER_PREFIX_LIST6 => "router/prefix-list6";
        ROUTER_ROUTE_MAP => "router/route-map";
        ROUTER_STATIC => "router/static";
        ROUTER_STATIC6 => "router/static6";

        SSH_FILTER_PROFILE => "ssh-filter/profile";

        SWITCH_CONTROLLER_CUSTOM_COMMAND => "switch-controller/custom-command";
        SWITCH_CONTROLLER_DYNAMIC_PORT_POLICY => "switch-controller/dynamic-port-policy";
        SWITCH_CONTROLLER_FORTILINK_SETTINGS => "switch-controller/fortilink-settings";
        SWITCH_CONTROLLER_LLDP_PROFILE => "switch-controller/lldp-profile";
        SWITCH_CONTROLLER_LOCATION => "switch-controller/location";
        SWITCH_CONTROLLER_MAC_POLICY => "switch-controller/mac-policy";
        SWITCH_CONTROLLER_MANAGED_SWITCH => "switch-controller/managed-switch";
        SWITCH_CONTROLLER_NAC_DEVICE => "switch-controller/nac-device";
        SWITCH_CONTROLLER_NAC_SETTINGS => "switch-controller/nac-settings";
        SWITCH_CONTROLLER_PORT_POLICY => "switch-controller/port-policy";
        SWITCH_CONTROLLER_REMOTE_LOG => "switch-controller/remote-log";
        SWITCH_CONTROLLER_SNMP_COMMUNITY => "switch-controller/snmp-community";
        SWITCH_CONTROLLER_SNMP_USER => "switch-controller/snmp-user";
        SWITCH_CONTROLLER_STORM_CONTROL_POLICY => "switch-controller/storm-control-policy";
        SWITCH_CONTROLLER_STP_INSTANCE => "switch-controller/stp-instance";
        SWITCH_CONTROLLER_SWITCH_GROUP => "switch-controller/switch-group";
        SWITCH_CONTROLLER_SWITCH_INTERFACE_TAG => "switch-controller/switch-interface-tag";
        SWITCH_CONTROLLER_SWITCH_PROFILE => "switch-controller/switch-profile";
        SWITCH_CONTROLLER_TRAFFIC_POLICY => "switch-controller/traffic-policy";
        SWITCH_CONTROLLER_VIRTUAL_PORT_POOL => "switch-controller/virtual-port-pool";
        SWITCH_CONTROLLER_VLAN => "switch-controller/vlan";
        SWITCH_CONTROLLER_VLAN_POLICY => "switch-controller/vlan-policy";

        SWITCH_CONTROLLER_ACL_GROUP => "switch-controller.acl/group";
        SWITCH_CONTROLLER_ACL_INGRESS => "switch-controller.acl/ingress";

        SWITCH_CONTROLLER_AUTO_CONFIG_CUSTOM => "switch-controller.auto-config/custom";
        SWITCH_CONTROLLER_AUTO_CONFIG_POLICY => "switch-controller.auto-config/policy";

        SWITCH_CONTROLLER_INITIAL_CONFIG_TEMPLATE => "switch-controller.initial-config/template";

        SWITCH_CONTROLLER_PTP_POLICY => "switch-controller.ptp/policy";

        SWITCH_CONTROLLER_QOS_DOT1P_MAP => "switch-controller.qos/dot1p-map";
        SWITCH_CONTROLLER_QOS_IP_DSCP_MAP => "switch-controller.qos/ip-dscp-map";
        SWITCH_CONTROLLER_QOS_QOS_POLICY => "switch-controller.qos/qos-policy";
        SWITCH_CONTROLLER_QOS_QUEUE_POLICY => "switch-controller.qos/queue-policy";

        SWITCH_CONTROLLER_SECURITY_POLICY_802_1X => "switch-controller.security-policy/802-1X";
        SWITCH_CONTROLLER_SECURITY_POLICY_CAPTIVE_PORTAL => "switch-controller.security-policy/captive-portal";
        SWITCH_CONTROLLER_SECURITY_POLICY_LOCAL_ACCESS => "switch-controller.security-policy/local-access";

        SYSTEM_ACCPROFILE => "system/accprofile";
        SYSTEM_ADMIN => "system/admin";
        SYSTEM_AFFINITY_INTERRUPT => "system/affinity-interrupt";
        SYSTEM_AFFINITY_PACKET_REDISTRIBUTION => "system/affinity-packet-redistribution";
        SYSTEM_ALIAS => "system/alias";
        SYSTEM_API_USER => "system/api-user";
        SYSTEM_ARP_TABLE => "system/arp-table";
        SYSTEM_AUTO_SCRIPT => "system/auto-script";
        SYSTEM_AUTOMATION_ACTION => "system/automation-action";
        SYSTEM_AUTOMATION_DESTINATION => "system/automation-destination";
        SYSTEM_AUTOMATION_STITCH => "system/automation-stitch";
        SYSTEM_AUTOMATION_TRIGGER => "system/automation-trigger";
        SYSTEM_CLUSTER_SYNC => "system/cluster-sync";
        SYSTEM_DDNS => "system/ddns";
        SYSTEM_DNS_DATABASE => "system/dns-database";
        SYSTEM_DNS_SERVER => "system/dns-server";
        SYSTEM_DSCP_BASED_PRIORITY => "system/dscp-based-priority";
        SYSTEM_EXTERNAL_RESOURCE => "system/external-resource";
        SYSTEM_GENEVE => "system/geneve";
        SYSTEM_GEOIP_COUNTRY => "system/geoip-country" [without_unset];
        SYSTEM_GEOIP_OVERRIDE => "system/geoip-override";
        SYSTEM_GRE_TUNNEL => "system/gre-tunnel";
        SYSTEM_INTERFACE => "system/interface";
        SYSTEM_IPIP_TUNNEL => "system/ipip-tunnel";
        SYSTEM_IPS_URLFILTER_DNS => "system/ips-urlfilter-dns";
        SYSTEM_IPS_URLFILTER_DNS6 => "system/ips-urlfilter-dns6";
        SYSTEM_IPSEC_AGGREGATE => "system/ipsec-aggregate";
        SYSTEM_IPV6_NEIGHBOR_CACHE => "system/ipv6-neighbor-cache";
        SYSTEM_IPV6_TUNNEL => "system/ipv6-tunnel";
        SYSTEM_LINK_MONITOR => "system/link-monitor";
        SYSTEM_MAC_ADDRESS_TABLE => "system/mac-address-table";
        SYSTEM_MOBILE_TUNNEL => "system/mobile-tunnel";
        SYSTEM_OBJECT_TAGGING => "system/object-tagging";
        SYSTEM_PHYSICAL_SWITCH => "system/physical-switch";
        SYSTEM_PPPOE_INTERFACE => "system/pppoe-interface";
        SYSTEM_PROXY_ARP => "system/proxy-arp";
        SYSTEM_REPLACEMSG_GROUP => "system/replacemsg-group";
        SYSTEM_REPLACEMSG_IMAGE => "system/replacemsg-image";
        SYSTEM_SDN_CONNECTOR => "system/sdn-connector";
        SYSTEM_SESSION_HELPER => "system/session-helper";
        SYSTEM_SIT_TUNNEL => "system/sit-tunnel";
        SYSTEM_SMS_SERVER => "system/sms-server";
        SYSTEM_SPEED_TEST_SCHEDULE => "system/speed-test-schedule";
        SYSTEM_SPEED_TEST_SERVER => "system/speed-test-server";
        SYSTEM_SSO_ADMIN => "system/sso-admin";
        SYSTEM_STORAGE => "system/storage";
        SYSTEM_SWITCH_INTERFACE => "system/switch-interface";
        SYSTEM_TOS_BASED_PRIORITY => "system/tos-based-priority";
        SYSTEM_VDOM => "system/vdom";
        SYSTEM_VDOM_EXCEPTION => "system/vdom-exception";
        SYSTEM_VDOM_LINK => "system/vdom-link";
        SYSTEM_VDOM_PROPERTY => "system/vdom-property";
        SYSTEM_VDOM_RADIUS_SERVER => "system/vdom-radius-server";
        SYSTEM_VIRTUAL_SWITCH => "system/virtual-switch";
        SYSTEM_VIRTUAL_WIRE_PAIR => "system/virtual-wire-pair";
        SYSTEM_VXLAN => "system/vxlan";
        SYSTEM_WCCP => "system/wccp";
        SYSTEM_ZONE => "system/zone";

        SYSTEM_3G_MODEM_CUSTOM => "system.3g-modem/custom";

        SYSTEM_DHCP_SERVER => "system.dhcp/server";

        SYSTEM_DHCP6_SERVER => "system.dhcp6/server";

        SYSTEM_LLDP_NETWORK_POLICY => "system.lldp/network-policy";

        SYSTEM_REPLACEMSG_ADMIN => "system.replacemsg/admin" [without_unset];
        SYSTEM_REPLACEMSG_ALERTMAIL => "system.replacemsg/alertmail" [without_unset];
        SYSTEM_REPLACEMSG_AUTH => "system.replacemsg/auth" [without_unset];
        SYSTEM_REPLACEMSG_AUTOMATION => "system.replacemsg/automation" [without_unset];
        SYSTEM_REPLACEMSG_DEVICE_DETECTION_PORTAL => "system.replacemsg/device-detection-portal" [without_unset];
        SYSTEM_REPLACEMSG_EC => "system.replacemsg/ec" [without_unset];
        SYSTEM_REPLACEMSG_FORTIGUARD_WF => "system.replacemsg/fortiguard-wf" [without_unset];
        SYSTEM_REPLACEMSG_FTP => "system.replacemsg/ftp" [without_unset];
        SYSTEM_REPLACEMSG_HTTP => "system.replacemsg/http" [without_unset];
        SYSTEM_REPLACEMSG_ICAP => "system.replacemsg/icap" [without_unset];
        SYSTEM_REPLACEMSG_MAIL => "system.replacemsg/mail" [without_unset];
        SYSTEM_REPLACEMSG_NAC_QUAR => "system.replacemsg/nac-quar" [without_unset];
        SYSTEM_REPLACEMSG_NNTP => "system.replacemsg/nntp" [without_unset];
        SYSTEM_REPLACEMSG_SPAM => "system.replacemsg/spam" [without_unset];
        SYSTEM_REPLACEMSG_SSLVPN => "system.replacemsg/sslvpn" [without_unset];
        SYSTEM_REPLACEMSG_TRAFFIC_QUOTA => "system.replacemsg/traffic-quota" [without_unset];
        SYSTEM_REPLACEMSG_UTM => "system.replacemsg/utm" [without_unset];
        SYSTEM_REPLACEMSG_WEBPROXY => "system.replacemsg/webproxy" [without_unset];

        SYSTEM_SNMP_COMMUNITY => "system.snmp/community";
        SYSTEM_SNMP_USER => "system.snmp/user";

        USER_ADGRP => "user/adgrp";
        USER_CERTIFICATE => "user/certificate";
        USER_DEVICE => "user/device";
        USER_DEVICE_ACCESS_LIST => "user/device-access-list";
        USER_DEVICE_CATEGORY => "user/device-category";
        USER_DEVICE_GROUP => "user/device-group";
        USER_DOMAIN_CONTROLLER => "user/domain-controller";
        USER_EXCHANGE => "user/exchange";
        USER_FORTITOKEN => "user/fortitoken";
        USER_FSSO => "user/fsso";
        USER_FSSO_POLLING => "user/fsso-polling";
        USER_GROUP => "user/group";
        USER_KRB_KEYTAB => "user/krb-keytab";
        USER_LDAP => "user/ldap";
        USER_LOCAL => "user/local";
        USER_NAC_POLICY => "user/nac-policy";
        USER_PASSWORD_POLICY => "user/password-policy";
        USER_PEER => "user/peer";
        USER_PEERGRP => "user/peergrp";
        USER_POP3 => "user/pop3";
        USER_RADIUS => "user/radius";
        USER_SAML => "user/saml";
        USER_SECURITY_EXEMPT_LIST => "user/security-exempt-list";
        USER_TACACS_PLUS => "user/tacacs+";

        VIDEOFILTER_PROFILE => "videofilter/profile";
        VIDEOFILTER_YOUTUBE_CHANNEL_FILTER => "videofilter/youtube-channel-filter";

        VOIP_PROFILE => "voip/profile";

        VPN_CERTIFICATE_CA => "vpn.certificate/ca";
        VPN_CERTIFICATE_CRL => "vpn.certificate/crl";
        VPN_CERTIFICATE_LOCAL => "vpn.certificate/local";
        VPN_CERTIFICATE_OCSP_SERVER => "vpn.certificate/ocsp-server";
        VPN_CERTIFICATE_REMOTE => "vpn.certificate/remote";

        VPN_IPSEC_CONCENTRATOR => "vpn.ipsec/concentrator";
        VPN_IPSEC_FORTICLIENT => "vpn.ipsec/forticlient";
        VPN_IPSEC_MANUALKEY => "vpn.ipsec/manualkey";
        VPN_IPSEC_MANUALKEY_INTERFACE => "vpn.ipsec/manualkey-interface";
        VPN_IPSEC_PHASE1 => "vpn.ipsec/phase1";
        VPN_IPSEC_PHASE1_INTERFACE => "vpn.ipsec/phase1-interface";
        VPN_IPSEC_PHASE2 => "vpn.ipsec/phase2";
        VPN_IPSEC_PHASE2_INTERFACE => "vpn.ipsec/phase2-interface";

        VPN_SSL_CLIENT => "vpn.ssl/client";

        VPN_SSL_WEB_HOST_CHECK_SOFTWARE => "vpn.ssl.web/host-check-software";
        VPN_SSL_WEB_PORTAL => "vpn.ssl.web/portal";
        VPN_SSL_WEB_REALM => "vpn.ssl.web/realm";
        VPN_SSL_WEB_USER_BOOKMARK => "vpn.ssl.web/user-bookmark";
        VPN_SSL_WEB_USER_GROUP_BOOKMARK => "vpn.ssl.web/user-group-bookmark";

        WAF_MAIN_CLASS => "waf/main-class" [without_unset];
        WAF_PROFILE => "waf/profile";
        WAF_SIGNATURE => "waf/signature" [without_unset];
        WAF_SUB_CLASS => "waf/sub-class" [without_unset];

        WANOPT_AUTH_GROUP => "wanopt/auth-group";
        WANOPT_CONTENT_DELIVERY_NETWORK_RULE => "wanopt/content-delivery-network-rule";
        WANOPT_PEER => "wanopt/peer";
        WANOPT_PROFILE => "wanopt/profile";

        WEB_PROXY_DEBUG_URL => "web-proxy/debug-url";
        WEB_PROXY_FORWARD_SERVER => "web-proxy/forward-server";
        WEB_PROXY_FORWARD_SERVER_GROUP => "web-proxy/forward-server-group";
        WEB_PROXY_PROFILE => "web-proxy/profile";
        WEB_PROXY_URL_MATCH => "web-proxy/url-match";
        WEB_PROXY_WISP => "web-proxy/wisp";

        WEBFILTER_CONTENT => "webfilter/content";
        WEBFILTER_CONTENT_HEADER => "webfilter/content-header";
        WEBFILTER_FTGD_LOCAL_CAT => "webfilter/ftgd-local-cat";
        WEBFILTER_FTGD_LOCAL_RATING => "webfilter/ftgd-local-rating";
        WEBFILTER_OVERRIDE => "webfilter/override";
        WEBFILTER_PROFILE => "webfilter/profile";
        WEBFILTER_SEARCH_ENGINE => "webfilter/search-engine";
        WEBFILTER_URLFILTER => "webfilter/urlfilter";

        WIRELESS_CONTROLLER_ACCESS_CONTROL_LIST => "wireless-controller/access-control-list";
        WIRELESS_CONTROLLER_ADDRESS => "wireless-controller/address";
        WIRELESS_CONTROLLER_ADDRGRP => "wireless-controller/addrgrp";
        WIRELESS_CONTROLLER_AP_STATUS => "wireless-controller/ap-status";
        WIRELESS_CONTROLLER_APCFG_PROFILE => "wireless-controller/apcfg-profile";
        WIRELESS_CONTROLLER_ARRP_PROFILE => "wireless-controller/arrp-profile";
        WIRELESS_CONTROLLER_BLE_PROFILE => "wireless-controller/ble-profile";
        WIRELESS_CONTROLLER_BONJOUR_PROFILE => "wireless-controller/bonjour-profile";
        WIRELESS_CONTROLLER_MPSK_PROFILE => "wireless-controller/mpsk-profile";
        WIRELESS_CONTROLLER_NAC_PROFILE => "wireless-controller/nac-profile";
        WIRELESS_CONTROLLER_QOS_PROFILE => "wireless-controller/qos-profile";
        WIRELESS_CONTROLLER_REGION => "wireless-controller/region" [without_unset];
        WIRELESS_CONTROLLER_SYSLOG_PROFILE => "wireless-controller/syslog-profile";
        WIRELESS_CONTROLLER_UTM_PROFILE => "wireless-controller/utm-profile";
        WIRELESS_CONTROLLER_VAP => "wireless-controller/vap";
        WIRELESS_CONTROLLER_VAP_GROUP => "wireless-controller/vap-group";
        WIRELESS_CONTROLLER_WAG_PROFILE => "wireless-controller/wag-profile";
        WIRELESS_CONTROLLER_WIDS_PROFILE => "wireless-controller/wids-profile";
        WIRELESS_CONTROLLER_WTP => "wireless-controller/wtp";
        WIRELESS_CONTROLLER_WTP_GROUP => "wireless-controller/wtp-group";
        WIRELESS_CONTROLLER_WTP_PROFILE => "wireless-controller/wtp-profile";

        WIRELESS_CONTROLLER_HOTSPOT20_ANQP_3GPP_CELLULAR => "wireless-controller.hotspot20/anqp-3gpp-cellular";
        WIRELESS_CONTROLLER_HOTSPOT20_ANQP_IP_ADDRESS_TYPE => "wireless-controller.hotspot20/anqp-ip-address-type";
        WIRELESS_CONTROLLER_HOTSPOT20_ANQP_NAI_REALM => "wireless-controller.hotspot20/anqp-nai-realm";
        WIRELESS_CONTROLLER_HOTSPOT20_ANQP_NETWORK_AUTH_TYPE => "wireless-controller.hotspot20/anqp-network-auth-type";
        WIRELESS_CONTROLLER_HOTSPOT20_ANQP_ROAMING_CONSORTIUM => "wireless-controller.hotspot20/anqp-roaming-consortium";
        WIRELESS_CONTROLLER_HOTSPOT20_ANQP_VENUE_NAME => "wireless-controller.hotspot20/anqp-venue-name";
        WIRELESS_CONTROLLER_HOTSPOT20_H2QP_CONN_CAPABILITY => "wireless-controller.hotspot20/h2qp-conn-capability";
        WIRELESS_CONTROLLER_HOTSPOT20_H2QP_OPERATOR_NAME => "wireless-controller.hotspot20/h2qp-operator-name";
        WIRELESS_CONTROLLER_HOTSPOT20_H2QP_OSU_PROVIDER => "wireless-controller.hotspot20/h2qp-osu-provider";
        WIRELESS_CONTROLLER_HOTSPOT20_H2QP_WAN_METRIC => "wireless-controller.hotspot20/h2qp-wan-metric";
        WIRELESS_CONTROLLER_HOTSPOT20_HS_PROFILE => "wireless-controller.hotspot20/hs-profile";
        WIRELESS_CONTROLLER_HOTSPOT20_ICON => "wireless-controller.hotspot20/icon";
        WIRELESS_CONTROLLER_HOTSPOT20_QOS_MAP => "wireless-controller.hotspot20/qos-map";
    }
    singletons {
        ALERTEMAIL_SETTING => "alertemail/setting";

        ANTIVIRUS_HEURISTIC => "antivirus/heuristic";
        ANTIVIRUS_QUARANTINE => "antivirus/quarantine";
        ANTIVIRUS_SETTINGS => "antivirus/settings";

        AUTHENTICATION_SETTING => "authentication/setting";

        AUTOMATION_SETTING => "automation/setting";

        DLP_SETTINGS => "dlp/settings";

        EMAILFILTER_FORTISHIELD => "emailfilter/fortishield";
        EMAILFILTER_OPTIONS => "emailfilter/options";

        ENDPOINT_CONTROL_SETTINGS => "endpoint-control/settings";

        FIREWALL_AUTH_PORTAL => "firewall/auth-portal";
        FIREWALL_INTERNET_SERVICE_APPEND => "firewall/internet-service-append";

        FIREWALL_IPMACBINDING_SETTING => "firewall.ipmacbinding/setting";

        FIREWALL_SSH_SETTING => "firewall.ssh/setting";

        FIREWALL_SSL_SETTING => "firewall.ssl/setting";

        FTP_PROXY_EXPLICIT => "ftp-proxy/explicit";

        IPS_GLOBAL => "ips/global";
        IPS_SETTINGS => "ips/settings";

        LOG_EVENTFILTER => "log/eventfilter";
        LOG_GUI_DISPLAY => "log/gui-display";
        LOG_SETTING => "log/setting";
        LOG_THREAT_WEIGHT => "log/threat-weight";

        LOG_DISK_FILTER => "log.disk/filter";
        LOG_DISK_SETTING => "log.disk/setting";

        LOG_FORTIANALYZER_FILTER => "log.fortianalyzer/filter";
        LOG_FORTIANALYZER_OVERRIDE_FILTER => "log.fortianalyzer/override-filter";
        LOG_FORTIANALYZER_OVERRIDE_SETTING => "log.fortianalyzer/override-setting";
        LOG_FORTIANALYZER_SETTING => "log.fortianalyzer/setting";

        LOG_FORTIANALYZER2_FILTER => "log.fortianalyzer2/filter";
        LOG_FORTIANALYZER2_SETTING => "log.fortianalyzer2/setting";

        LOG_FORTIANALYZER3_FILTER => "log.fortianalyzer3/filter";
        LOG_FORTIANALYZER3_SETTING => "log.fortianalyzer3/setting";

        LOG_FORTIANALYZER_CLOUD_FILTER => "log.fortianalyzer-cloud/filter";
        LOG_FORTIANALYZER_CLOUD_SETTING => "log.fortianalyzer-cloud/setting";

        LOG_FORTIGUARD_FILTER => "log.fortiguard/filter";
        LOG_FORTIGUARD_OVERRIDE_FILTER => "log.fortiguard/override-filter";
        LOG_FORTIGUARD_OVERRIDE_SETTING => "log.fortiguard/override-setting";
        LOG_FORTIGUARD_SETTING => "log.fortiguard/setting";

        LOG_MEMORY_FILTER => "log.memory/filter";
        LOG_MEMORY_GLOBAL_SETTING => "log.memory/global-setting";
        LOG_MEMORY_SETTING => "log.memory/setting";

        LOG_NULL_DEVICE_FILTER => "log.null-device/filter";
        LOG_NULL_DEVICE_SETTING => "log.null-device/setting";

        LOG_SYSLOGD_FILTER => "log.syslogd/filter";
        LOG_SYSLOGD_OVERRIDE_FILTER => "log.syslogd/override-filter";
        LOG_SYSLOGD_OVERRIDE_SETTING => "log.syslogd/override-setting";
        LOG_SYSLOGD_SETTING => "log.syslogd/setting";

        LOG_SYSLOGD2_FILTER => "log.syslogd2/filter";
        LOG_SYSLOGD2_SETTING => "log.syslogd2/setting";

        LOG_SYSLOGD3_FILTER => "log.syslogd3/filter";
        LOG_SYSLOGD3_SETTING => "log.syslogd3/setting";

        LOG_SYSLOGD4_FILTER => "log.syslogd4/filter";
        LOG_SYSLOGD4_SETTING => "log.syslogd4/setting";

        LOG_WEBTRENDS_FILTER => "log.webtrends/filter";
        LOG_WEBTRENDS_SETTING => "log.webtrends/setting";

        NSXT_SETTING => "nsxt/setting";

        REPORT_SETTING => "report/setting";

        ROUTER_BFD => "router/bfd";
        ROUTER_BFD6 => "router/bfd6";
        ROUTER_BGP => "router/bgp";
        ROUTER_ISIS => "router/isis";
        ROUTER_MULTICAST => "router/multicast";
        ROUTER_MULTICAST6 => "router/multicast6";
        ROUTER_OSPF => "router/ospf";
        ROUTER_OSPF6 => "router/ospf6";
        ROUTER_RIP => "router/rip";
        ROUTER_RIPNG => "router/ripng";
        ROUTER_SETTING => "router/setting";

        SWITCH_CONTROLLER_802_1X_SETTINGS => "switch-controller/802-1X-settings";
        SWITCH_CONTROLLER_FLOW_TRACKING => "switch-controller/flow-tracking";
        SWITCH_CONTROLLER_GLOBAL => "switch-controller/global";
        SWITCH_CONTROLLER_IGMP_SNOOPING => "switch-controller/igmp-snooping";
        SWITCH_CONTROLLER_LLDP_SETTINGS => "switch-controller/lldp-settings";
        SWITCH_CONTROLLER_MAC_SYNC_SETTINGS => "switch-controller/mac-sync-settings";
        SWITCH_CONTROLLER_NETWORK_MONITOR_SETTINGS => "switch-controller/network-monitor-settings";
        SWITCH_CONTROLLER_QUARANTINE => "switch-controller/quarantine";
        SWITCH_CONTROLLER_SFLOW => "switch-controller/sflow";
        SWITCH_CONTROLLER_SNMP_SYSINFO => "switch-controller/snmp-sysinfo";
        SWITCH_CONTROLLER_SNMP_TRAP_THRESHOLD => "switch-controller/snmp-trap-threshold";
        SWITCH_CONTROLLER_STP_SETTINGS => "switch-controller/stp-settings";
        SWITCH_CONTROLLER_STORM_CONTROL => "switch-controller/storm-control";
        SWITCH_CONTROLLER_SWITCH_LOG => "switch-controller/switch-log";
        SWITCH_CONTROLLER_SYSTEM => "switch-controller/system";
        SWITCH_CONTROLLER_TRAFFIC_SNIFFER => "switch-controller/traffic-sniffer";

        SWITCH_CONTROLLER_AUTO_CONFIG_DEFAULT => "switch-controller.auto-config/default";

        SWITCH_CONTROLLER_INITIAL_CONFIG_VLANS => "switch-controller.initial-config/vlans";

        SWITCH_CONTROLLER_PTP_SETTINGS => "switch-controller.ptp/settings";

        SYSTEM_ACME => "system/acme";
        SYSTEM_ALARM => "system/alarm";
        SYSTEM_AUTO_INSTALL => "system/auto-install";
        SYSTEM_CENTRAL_MANAGEMENT => "system/central-management";
        SYSTEM_CONSOLE => "system/console";
        SYSTEM_CSF => "system/csf";
        SYSTEM_DEDICATED_MGMT => "system/dedicated-mgmt";
        SYSTEM_DNS => "system/dns";
        SYSTEM_DNS64 => "system/dns64";
        SYSTEM_EMAIL_SERVER => "system/email-server";
        SYSTEM_FEDERATED_UPGRADE => "system/federated-upgrade";
        SYSTEM_FIPS_CC => "system/fips-cc";
        SYSTEM_FM => "system/fm";
        SYSTEM_FORTIGUARD => "system/fortiguard";
        SYSTEM_FORTISANDBOX => "system/fortisandbox";
        SYSTEM_FSSO_POLLING => "system/fsso-polling";
        SYSTEM_FTM_PUSH => "system/ftm-push";
        SYSTEM_GLOBAL => "system/global";
        SYSTEM_HA => "system/ha";
        SYSTEM_HA_MONITOR => "system/ha-monitor";
        SYSTEM_IKE => "system/ike";
        SYSTEM_IPAM => "system/ipam";
        SYSTEM_IPS => "system/ips";
        SYSTEM_LTE_MODEM => "system/lte-modem";
        SYSTEM_MANAGEMENT_TUNNEL => "system/management-tunnel";
        SYSTEM_MODEM => "system/modem";
        SYSTEM_NAT64 => "system/nat64";
        SYSTEM_ND_PROXY => "system/nd-proxy";
        SYSTEM_NETFLOW => "system/netflow";
        SYSTEM_NETWORK_VISIBILITY => "system/network-visibility";
        SYSTEM_NPU => "system/npu";
        SYSTEM_NTP => "system/ntp";
        SYSTEM_PASSWORD_POLICY => "system/password-policy";
        SYSTEM_PASSWORD_POLICY_GUEST_ADMIN => "system/password-policy-guest-admin";
        SYSTEM_PROBE_RESPONSE => "system/probe-response";
        SYSTEM_PTP => "system/ptp";
        SYSTEM_RESOURCE_LIMITS => "system/resource-limits";
        SYSTEM_SAML => "system/saml";
        SYSTEM_SDWAN => "system/sdwan";
        SYSTEM_SESSION_TTL => "system/session-ttl";
        SYSTEM_SETTINGS => "system/settings";
        SYSTEM_SFLOW => "system/sflow";
        SYSTEM_SMC_NTP => "system/smc-ntp";
        SYSTEM_STP => "system/stp";
        SYSTEM_VDOM_DNS => "system/vdom-dns";
        SYSTEM_VDOM_NETFLOW => "system/vdom-netflow";
        SYSTEM_VDOM_SFLOW => "system/vdom-sflow";
        SYSTEM_VIRTUAL_WAN_LINK => "system/virtual-wan-link";
        SYSTEM_VNE_TUNNEL => "system/vne-tunnel";

        SYSTEM_AUTOUPDATE_PUSH_UPDATE => "system.autoupdate/push-update";
        SYSTEM_AUTOUPDATE_SCHEDULE => "system.autoupdate/schedule";
        SYSTEM_AUTOUPDATE_TUNNELING => "system.autoupdate/tunneling";

        SYSTEM_SNMP_SYSINFO => "system.snmp/sysinfo";

        USER_QUARANTINE => "user/quarantine";
        USER_SETTING => "user/setting";

        VPN_L2TP => "vpn/l2tp";
        VPN_OCVPN => "vpn/ocvpn";
        VPN_PPTP => "vpn/pptp";

        VPN_CERTIFICATE_SETTING => "vpn.certificate/setting";

        VPN_SSL_SETTINGS => "vpn.ssl/settings";

        WANOPT_CACHE_SERVICE => "wanopt/cache-service";
        WANOPT_REMOTE_STORAGE => "wanopt/remote-storage";
        WANOPT_SETTINGS => "wanopt/settings";
        WANOPT_WEBCACHE => "wanopt/webcache";

        WEB_PROXY_EXPLICIT => "web-proxy/explicit";
        WEB_PROXY_GLOBAL => "web-proxy/global";

        WEBFILTER_FORTIGUARD => "webfilter/fortiguard";
        WEBFILTER_IPS_URLFILTER_CACHE_SETTING => "webfilter/ips-urlfilter-cache-setting";
        WEBFILTER_IPS_URLFILTER_SETTING => "webfilter/ips-urlfilter-setting";
        WEBFILTER_IPS_URLFILTER_SETTING6 => "webfilter/ips-urlfilter-setting6";

        WIRELESS_CONTROLLER_GLOBAL => "wireless-controller/global";
        WIRELESS_CONTROLLER_INTER_CONTROLLER => "wireless-controller/inter-controller";
        WIRELESS_CONTROLLER_LOG => "wireless-controller/log";
        WIRELESS_CONTROLLER_SETTING => "wireless-controller/setting";
        WIRELESS_CONTROLLER_SNMP => "wireless-controller/snmp";
        WIRELESS_CONTROLLER_TIMERS => "wireless-controller/timers";
    }
}

/// Name index over both the path form and the dotted form of every type.
static INDEX: LazyLock<HashMap<String, ObjectType>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for table in TABLES {
        m.insert(table.path().to_string(), ObjectType::Table(*table));
        m.insert(dotted(table.path()), ObjectType::Table(*table));
    }
    for single in SINGLETONS {
        m.insert(single.path().to_string(), ObjectType::Singleton(*single));
        m.insert(dotted(single.path()), ObjectType::Singleton(*single));
    }
    m
});

/// Resolve an object type by name.
///
/// Accepts the CMDB path (`firewall/address`, `vpn.ipsec/phase1-interface`)
/// or the dotted form (`firewall.address`). Matching is exact; the appliance
/// treats some paths case-sensitively (`firewall/DoS-policy`).
pub fn lookup(name: &str) -> Option<ObjectType> {
    INDEX.get(name.trim_matches('/')).copied()
}

/// All object types, tables first, in catalog order.
pub fn all() -> impl Iterator<Item = ObjectType> {
    TABLES
        .iter()
        .map(|t| ObjectType::Table(*t))
        .chain(SINGLETONS.iter().map(|s| ObjectType::Singleton(*s)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_lookup_path_and_dotted() {
        assert_eq!(
            lookup("firewall/address"),
            Some(ObjectType::Table(&FIREWALL_ADDRESS))
        );
        assert_eq!(
            lookup("firewall.address"),
            Some(ObjectType::Table(&FIREWALL_ADDRESS))
        );
        assert_eq!(
            lookup("system.replacemsg.mail"),
            Some(ObjectType::Table(&SYSTEM_REPLACEMSG_MAIL))
        );
        assert_eq!(
            lookup("system/global"),
            Some(ObjectType::Singleton(&SYSTEM_GLOBAL))
        );
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(lookup("firewall/nonexistent"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_lookup_trims_slashes() {
        assert_eq!(
            lookup("/router/bgp/"),
            Some(ObjectType::Singleton(&ROUTER_BGP))
        );
    }

    #[test]
    fn test_index_has_no_collisions() {
        let count = TABLES.len() + SINGLETONS.len();
        assert_eq!(INDEX.len(), count * 2);
        assert_eq!(all().count(), count);
    }

    #[test]
    fn test_paths_are_unique_and_well_formed() {
        let mut seen = HashSet::new();
        for ty in all() {
            let path = ty.path();
            assert!(seen.insert(path), "duplicate catalog path {path}");
            assert_eq!(path.matches('/').count(), 1, "bad path {path}");
            assert!(!path.starts_with('/') && !path.ends_with('/'));
        }
    }

    #[test]
    fn test_unset_flags() {
        assert!(FIREWALL_POLICY.supports_delete());
        assert!(!SYSTEM_REPLACEMSG_HTTP.supports_delete());
        assert!(!FIREWALL_INTERNET_SERVICE.supports_delete());
        assert!(TABLES.iter().any(|t| !t.supports_delete()));
    }

    #[test]
    fn test_catalog_covers_several_hundred_types() {
        assert!(TABLES.len() > 300);
        assert!(SINGLETONS.len() > 100);
    }
}
